use crate::host::widget::{Client, PositionMode, WidgetPatch};
use crate::shim::context::LayoutShim;
use crate::shim::snapshot::ResetOrder;

/// What a reset touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub parents_cleared: usize,
    pub restored_normal: usize,
    pub restored_last: usize,
    pub skipped_absent: usize,
    pub sprites_removed: usize,
}

/// Undo every change recorded in `shim` and deactivate it.
///
/// Order: synthetic children, viewport, first-batch widgets (all written, then all revalidated),
/// last-batch widgets (same), sprite overrides. Calling it again with nothing recorded is a no-op;
/// registered children or sprite overrides are always undone.
#[tracing::instrument(skip_all)]
pub fn reset<C: Client + ?Sized>(shim: &mut LayoutShim, client: &mut C) -> ResetReport {
    let mut report = ResetReport::default();
    if !shim.engine.is_active() && shim.engine.snapshots().is_empty() && shim.is_pristine() {
        return report;
    }

    for parent in shim.take_synthetic_parents() {
        if client.exists(parent) {
            client.delete_all_children(parent);
            report.parents_cleared += 1;
        }
    }

    let viewport = shim.viewport();
    let pass_through = WidgetPatch::sized(0, 0).with_y_mode(PositionMode::AbsoluteCenter);
    if client.apply_patch(viewport, &pass_through) {
        client.revalidate(viewport);
    }

    for order in [ResetOrder::Normal, ResetOrder::Last] {
        let batch = shim.engine.snapshots().batch(order);
        let mut written = Vec::with_capacity(batch.len());
        for (id, snap) in batch {
            if client.apply_patch(id, &snap.restore_patch()) {
                written.push(id);
            } else {
                report.skipped_absent += 1;
            }
        }
        for id in &written {
            client.revalidate(*id);
        }
        match order {
            ResetOrder::Normal => report.restored_normal = written.len(),
            ResetOrder::Last => report.restored_last = written.len(),
        }
    }

    let sprites = shim.take_sprite_overrides();
    report.sprites_removed = sprites.len();
    for sprite_id in sprites {
        client.remove_sprite_override(sprite_id);
    }
    client.reset_sprite_cache();

    shim.engine.snapshots_mut().clear();
    shim.engine.deactivate();
    tracing::debug!(?report, "layout reset");
    report
}

#[cfg(test)]
#[path = "../../tests/unit/shim/reset.rs"]
mod tests;
