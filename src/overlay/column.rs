use std::path::Path;

use crate::assets::library::OverlayAssets;
use crate::config::HybridConfig;
use crate::foundation::core::{Point, Rect, Size};
use crate::host::widget::{WidgetId, WidgetTreeView};
use crate::hybrid::ids;
use crate::overlay::cache::{BackgroundCache, BackgroundKey};
use crate::render::bitmap::Bitmap;
use crate::render::surface::Surface;

/// Width of the reserved side column, matching the fixed layout's side panel.
pub const COLUMN_WIDTH: u32 = 249;

/// Gap border offset above the inventory panel.
const INVENTORY_BORDER_DY: f64 = -15.0;
/// Gap border offset below the top of the minimap orbs.
const MINIMAP_BORDER_DY: f64 = 158.0;

/// Widgets whose measured positions anchor the decals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayTargets {
    pub inventory: WidgetId,
    pub minimap: WidgetId,
}

impl Default for OverlayTargets {
    fn default() -> Self {
        Self {
            inventory: ids::SIDE_MENU,
            minimap: ids::ORBS_UNIVERSE,
        }
    }
}

/// Draws the side column once per frame: cached background, gap borders, the inventory warning
/// decal and the tint, in that order.
///
/// Reads the widget tree but never writes it.
#[derive(Debug, Default)]
pub struct ColumnOverlay {
    assets: OverlayAssets,
    targets: OverlayTargets,
    cache: BackgroundCache,
}

impl ColumnOverlay {
    pub fn new(assets: OverlayAssets) -> Self {
        Self {
            assets,
            targets: OverlayTargets::default(),
            cache: BackgroundCache::new(),
        }
    }

    pub fn with_targets(mut self, targets: OverlayTargets) -> Self {
        self.targets = targets;
        self
    }

    pub fn assets(&self) -> &OverlayAssets {
        &self.assets
    }

    pub fn cache(&self) -> &BackgroundCache {
        &self.cache
    }

    /// Replace the custom tile. The cached background is dropped since its key cannot tell
    /// images apart.
    pub fn set_custom_tile(&mut self, tile: Option<Bitmap>) {
        self.assets.custom_tile = tile.map(std::sync::Arc::new);
        self.cache.invalidate();
    }

    /// Reload the custom tile from disk, falling back to the stone tile on failure.
    pub fn reload_custom_tile(&mut self, path: &Path) -> bool {
        let loaded = self.assets.load_custom_tile(path);
        self.cache.invalidate();
        loaded
    }

    /// Compose one frame into `surface` and return the column size.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        view: &dyn WidgetTreeView,
        client_size: Size,
        config: &HybridConfig,
    ) -> Size {
        let width = f64::from(COLUMN_WIDTH);
        let column = Rect::new(
            client_size.width - width,
            0.0,
            client_size.width,
            client_size.height,
        );

        let key = BackgroundKey {
            height: client_size.height.max(0.0) as u32,
            mode: config.background_mode,
            color: config.background_color,
        };
        let tile = self.assets.tile_source(config.background_mode).cloned();
        let background = self.cache.get_or_build(COLUMN_WIDTH, key, tile.as_deref());
        surface.draw_bitmap(&background, column.origin());

        if config.use_gap_borders
            && let Some(border) = &self.assets.gap_border
        {
            for (target, dy) in [
                (self.targets.inventory, INVENTORY_BORDER_DY),
                (self.targets.minimap, MINIMAP_BORDER_DY),
            ] {
                if let Some(bounds) = view.bounds(target) {
                    surface.draw_bitmap(border, Point::new(bounds.x0, bounds.y0 + dy));
                }
            }
        }

        if config.inv_background_warning
            && let Some(warning) = &self.assets.warning
            && view.is_visible(self.targets.inventory)
            && let Some(inventory) = view.bounds(self.targets.inventory)
        {
            let paint = inventory.intersect(column);
            if paint.width() > 0.0 && paint.height() > 0.0 {
                surface.push_clip(paint);
                surface.draw_image(warning, inventory);
                surface.pop_clip();
            }
        }

        let tint = config.gap_background_tint;
        if !tint.is_transparent() {
            surface.fill_rect_src_atop(column, tint);
        }

        column.size()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/column.rs"]
mod tests;
