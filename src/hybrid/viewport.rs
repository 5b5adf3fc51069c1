use crate::foundation::error::{HybridError, HybridResult};
use crate::host::widget::{Client, PositionMode, WidgetPatch};
use crate::hybrid::chat::CHAT_BUTTONS_HEIGHT;
use crate::hybrid::ids;
use crate::hybrid::plugin::HybridPlugin;
use crate::overlay::COLUMN_WIDTH;
use crate::shim::{NormalizeOpts, ResetOrder, normalize_descendants};

/// Depth of the overlay subtree under the click window that gets normalized.
const OVERLAY_DEPTH: u32 = 4;
/// Height of the HUD container while the wide chatbox is closed or not centered.
const HUD_CHAT_HEIGHT: i32 = 165;
/// Original width the host gives the HUD container to stop short of the side panel.
const HUD_RESERVED_WIDTH: i32 = 250;

impl HybridPlugin {
    /// Shrink the viewport so nothing renders under the side column.
    ///
    /// The viewport is sized "parent minus width", so the reserve is the column width. Reset
    /// puts it back to pass-through on its own, so the write is not snapshotted.
    pub(crate) fn resize_viewport<C: Client + ?Sized>(&mut self, client: &mut C) {
        let viewport = self.shim.viewport();
        if !client.apply_patch(viewport, &WidgetPatch::new().with_width(COLUMN_WIDTH as i32)) {
            return;
        }
        if self.config.wide_chatbox {
            self.chatbox_changed(client);
        }
        client.revalidate(viewport);
    }

    /// Size the click window to the viewport, then clear reserved bands in the overlays under it.
    pub(crate) fn fix_ingame_overlay<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() {
            return;
        }
        let Some(viewport) = client.size(ids::VIEWPORT) else {
            return;
        };
        if !client.exists(ids::VIEWPORT_TRACKER_BACK) {
            return;
        }
        let patch = WidgetPatch::sized(viewport.width as i32, viewport.height as i32)
            .with_x_mode(PositionMode::AbsoluteStart)
            .with_y_mode(PositionMode::AbsoluteStart);
        self.shim
            .engine
            .apply(client, ids::VIEWPORT_TRACKER_BACK, &patch, ResetOrder::Normal);

        let opts = NormalizeOpts {
            max_depth: OVERLAY_DEPTH,
            collapse_chat_height: self.config.wide_chatbox
                && self.config.chatbox_viewport_centering
                && self.is_chatbox_open(client),
        };
        normalize_descendants(client, ids::VIEWPORT_TRACKER_BACK, opts, 0);
    }

    /// Fit interface bounding boxes (bank, settings, ...) to the shrunken viewport.
    pub(crate) fn fix_interface_dimensions<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() {
            return;
        }
        self.fix_ingame_overlay(client);

        let Some(viewport) = client.size(ids::VIEWPORT) else {
            return;
        };
        let hud = ids::HUD_CONTAINER_FRONT;
        let Some(hud_attrs) = client.attributes(hud) else {
            return;
        };
        let Some(parent) = client.parent(hud) else {
            return;
        };
        let Some(parent_attrs) = client.attributes(parent) else {
            return;
        };
        let viewport_w = viewport.width as i32;
        let viewport_h = viewport.height as i32;
        let pg = parent_attrs.geometry;
        let centered_over_chat = self.config.wide_chatbox
            && self.config.chatbox_viewport_centering
            && !self.chat.transparent
            && self.is_chatbox_open(client);
        let engine = &mut self.shim.engine;

        if pg.x_mode == PositionMode::AbsoluteCenter || pg.y_mode == PositionMode::AbsoluteCenter {
            let patch = WidgetPatch::new()
                .with_x_mode(PositionMode::AbsoluteStart)
                .with_y_mode(PositionMode::AbsoluteStart)
                .with_width(viewport_w);
            engine.apply(client, parent, &patch, ResetOrder::Normal);
        }

        if !self.config.wide_chatbox {
            if pg.height != viewport_h {
                engine.apply(
                    client,
                    parent,
                    &WidgetPatch::new().with_height(viewport_h),
                    ResetOrder::Normal,
                );
            }
        } else {
            let (parent_h, hud_h) = if centered_over_chat {
                (viewport_h, 0)
            } else {
                (viewport_h + self.chat.viewport_offset(), HUD_CHAT_HEIGHT)
            };
            engine.apply(
                client,
                parent,
                &WidgetPatch::new().with_height(parent_h),
                ResetOrder::Normal,
            );
            engine.apply(
                client,
                hud,
                &WidgetPatch::new().with_height(hud_h),
                ResetOrder::Normal,
            );
        }

        if hud_attrs.geometry.width == HUD_RESERVED_WIDTH {
            self.shim.engine.apply(
                client,
                hud,
                &WidgetPatch::new().with_width(0),
                ResetOrder::Normal,
            );
        }
        for child in client.static_children(hud) {
            client.revalidate(child);
        }
    }

    /// Fit the four-piece background of a modal interface around it.
    ///
    /// The pieces are host-built dynamic children, rebuilt whenever the modal opens, so they are
    /// written directly.
    pub(crate) fn fix_modal_background<C: Client + ?Sized>(
        &mut self,
        client: &mut C,
    ) -> HybridResult<()> {
        let background = ids::MAINMODAL_BACKGROUNDS;
        let (Some(modal), Some(modal_rel), Some(viewport), Some(hud), Some(hud_parent)) = (
            client.size(ids::MAINMODAL),
            client.relative_bounds(ids::MAINMODAL),
            client.size(ids::VIEWPORT),
            client.size(ids::HUD_CONTAINER_FRONT),
            client
                .parent(ids::HUD_CONTAINER_FRONT)
                .and_then(|p| client.size(p)),
        ) else {
            return Ok(());
        };
        if !client.exists(background) {
            return Ok(());
        }
        let pieces = client.dynamic_children(background);
        let [top, bottom, left, right] = pieces.as_slice() else {
            return Err(HybridError::topology(format!(
                "modal background has {} pieces, expected 4",
                pieces.len()
            )));
        };

        let top_h = modal_rel.y0 as i32;
        let left_w = modal_rel.x0 as i32;
        let right_w = hud.width as i32 - modal.width as i32 - left_w;
        let modal_h = modal.height as i32;

        let (bottom_h, bottom_y) = if self.config.wide_chatbox {
            if self.is_chatbox_open(client) {
                (
                    hud.height as i32 - modal_h - top_h,
                    Some(hud_parent.height as i32 - hud.height as i32),
                )
            } else {
                (
                    hud_parent.height as i32 - modal_h - top_h - CHAT_BUTTONS_HEIGHT,
                    Some(CHAT_BUTTONS_HEIGHT),
                )
            }
        } else {
            (viewport.height as i32 - top_h - modal_h, None)
        };

        let mut bottom_patch = WidgetPatch::new().with_height(bottom_h);
        if let Some(y) = bottom_y {
            bottom_patch = bottom_patch.with_y(y);
        }
        client.apply_patch(*left, &WidgetPatch::new().with_width(left_w).with_y(top_h));
        client.apply_patch(*right, &WidgetPatch::new().with_width(right_w).with_y(top_h));
        client.apply_patch(*top, &WidgetPatch::new().with_height(top_h));
        client.apply_patch(*bottom, &bottom_patch);
        client.revalidate(background);
        Ok(())
    }

    /// Center the skill guide over the viewport.
    pub(crate) fn fix_skill_guide<C: Client + ?Sized>(&mut self, client: &mut C) {
        let patch = WidgetPatch::new()
            .with_x(0)
            .with_x_mode(PositionMode::AbsoluteCenter);
        self.shim
            .engine
            .apply(client, ids::SKILL_GUIDE_UNIVERSE, &patch, ResetOrder::Normal);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/viewport.rs"]
mod tests;
