use crate::host::widget::{WidgetId, WidgetPatch, WidgetTree, WidgetTreeView};
use crate::shim::snapshot::{AttributeSnapshot, ResetOrder, SnapshotStore};

/// Capture-then-write gate in front of every widget mutation.
///
/// While inactive nothing is captured or written. While active, the first touch of a widget
/// records its attributes; later touches only write.
#[derive(Debug, Default)]
pub struct OverrideEngine {
    active: bool,
    snapshots: SnapshotStore,
}

impl OverrideEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub(crate) fn snapshots_mut(&mut self) -> &mut SnapshotStore {
        &mut self.snapshots
    }

    /// Snapshot of `id` taken before its first override.
    pub fn snapshot(&self, id: WidgetId) -> Option<&AttributeSnapshot> {
        self.snapshots.get(id)
    }

    /// Record `id` without writing it. Returns `false` when inactive or the widget is absent.
    pub fn capture<T: WidgetTreeView + ?Sized>(
        &mut self,
        tree: &T,
        id: WidgetId,
        order: ResetOrder,
    ) -> bool {
        if !self.active {
            return false;
        }
        let Some(attrs) = tree.attributes(id) else {
            return false;
        };
        self.snapshots.save(id, AttributeSnapshot::capture(&attrs, order));
        true
    }

    /// Capture, write `patch`, then revalidate `id`.
    pub fn apply<T: WidgetTree + ?Sized>(
        &mut self,
        tree: &mut T,
        id: WidgetId,
        patch: &WidgetPatch,
        order: ResetOrder,
    ) -> bool {
        if !self.apply_without_layout(tree, id, patch, order) {
            return false;
        }
        tree.revalidate(id);
        true
    }

    /// Capture and write `patch`; the caller revalidates an ancestor instead.
    pub fn apply_without_layout<T: WidgetTree + ?Sized>(
        &mut self,
        tree: &mut T,
        id: WidgetId,
        patch: &WidgetPatch,
        order: ResetOrder,
    ) -> bool {
        if !self.active {
            return false;
        }
        let Some(attrs) = tree.attributes(id) else {
            return false;
        };
        self.snapshots.save(id, AttributeSnapshot::capture(&attrs, order));
        tree.apply_patch(id, patch)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shim/overrides.rs"]
mod tests;
