use crate::host::widget::{Client, WidgetId, WidgetPatch};
use crate::hybrid::ids;
use crate::hybrid::plugin::HybridPlugin;
use crate::shim::ResetOrder;

/// Side panel size in the fixed layout.
pub const PANEL_WIDTH: i32 = 249;
pub const PANEL_HEIGHT: i32 = 336;

impl HybridPlugin {
    /// Reshape the side panel into the fixed layout's inventory frame.
    pub(crate) fn inventory_bounds_fix<C: Client + ?Sized>(&mut self, client: &mut C) {
        let edits: [(WidgetId, WidgetPatch, ResetOrder); 9] = [
            (
                ids::SIDE_MENU,
                WidgetPatch::sized(PANEL_WIDTH, PANEL_HEIGHT),
                ResetOrder::Last,
            ),
            (
                ids::SIDE_BACKGROUND,
                WidgetPatch::at(28, 37)
                    .with_width(190)
                    .with_height(261)
                    .with_sprite(ids::SPRITE_SIDE_BACKGROUND_FIXED),
                ResetOrder::Normal,
            ),
            (
                ids::SIDE_LEFT_COLUMN,
                WidgetPatch::new().with_hidden(true),
                ResetOrder::Normal,
            ),
            (
                ids::SIDE_RIGHT_COLUMN,
                WidgetPatch::new().with_hidden(true),
                ResetOrder::Normal,
            ),
            (
                ids::SIDE_BOTTOM_BAR,
                WidgetPatch::sized(246, 37).with_sprite(ids::SPRITE_SIDE_BOTTOM_BAR_FIXED),
                ResetOrder::Normal,
            ),
            (
                ids::SIDE_BOTTOM,
                WidgetPatch::new().with_x(2),
                ResetOrder::Last,
            ),
            (
                ids::SIDE_TOP_BAR,
                WidgetPatch::new()
                    .with_y(298)
                    .with_width(PANEL_WIDTH)
                    .with_height(38)
                    .with_sprite(ids::SPRITE_SIDE_TOP_BAR_FIXED),
                ResetOrder::Normal,
            ),
            (ids::SIDE_TOP, WidgetPatch::new().with_x(2), ResetOrder::Last),
            (
                ids::SIDE_CONTAINER,
                WidgetPatch::new().with_x(26 + 2),
                ResetOrder::Normal,
            ),
        ];
        for (id, patch, order) in edits {
            self.shim.engine.apply(client, id, &patch, order);
        }
    }

    /// Put the fixed inventory background back after the host swapped in its resizable one.
    pub(crate) fn fix_inventory_background<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() {
            return;
        }
        let background = ids::SIDE_BACKGROUND;
        if client
            .attributes(background)
            .is_some_and(|a| a.sprite_id == ids::SPRITE_SIDE_BACKGROUND_RESIZABLE)
        {
            self.shim.engine.apply_without_layout(
                client,
                background,
                &WidgetPatch::new().with_sprite(ids::SPRITE_SIDE_BACKGROUND_FIXED),
                ResetOrder::Normal,
            );
        }
    }

    /// Show the inventory the host hides at the start of a cutscene.
    ///
    /// Written directly: restoring a snapshot of the hidden state would hide it after reset.
    pub(crate) fn reveal_inventory<C: Client + ?Sized>(&mut self, client: &mut C) {
        if client
            .attributes(ids::SIDE_MENU)
            .is_some_and(|a| a.self_hidden)
        {
            client.apply_patch(ids::SIDE_MENU, &WidgetPatch::new().with_hidden(false));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/inventory.rs"]
mod tests;
