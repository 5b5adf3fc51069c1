use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::load_image;
use crate::config::BackgroundMode;
use crate::render::bitmap::Bitmap;

/// Decoded images the column overlay draws.
///
/// Every slot is optional: a missing image disables the layer that uses it (or, for tiles, falls
/// back to the next source) instead of failing the frame.
#[derive(Clone, Debug, Default)]
pub struct OverlayAssets {
    /// 15 px border drawn in the gaps above the inventory and below the minimap.
    pub gap_border: Option<Arc<Bitmap>>,
    /// Decal drawn over the inventory when its background is see-through.
    pub warning: Option<Arc<Bitmap>>,
    /// Built-in stone tile.
    pub stone_tile: Option<Arc<Bitmap>>,
    /// User-provided tile.
    pub custom_tile: Option<Arc<Bitmap>>,
}

impl OverlayAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_border(mut self, bitmap: Bitmap) -> Self {
        self.gap_border = Some(Arc::new(bitmap));
        self
    }

    pub fn with_warning(mut self, bitmap: Bitmap) -> Self {
        self.warning = Some(Arc::new(bitmap));
        self
    }

    pub fn with_stone_tile(mut self, bitmap: Bitmap) -> Self {
        self.stone_tile = Some(Arc::new(bitmap));
        self
    }

    pub fn with_custom_tile(mut self, bitmap: Bitmap) -> Self {
        self.custom_tile = Some(Arc::new(bitmap));
        self
    }

    /// Load the custom tile from `path`, replacing any previous one.
    ///
    /// A load failure is logged and leaves the slot empty so rendering falls back to the stone
    /// tile. Returns `true` when the image loaded.
    pub fn load_custom_tile(&mut self, path: &Path) -> bool {
        match load_image(path) {
            Ok(bitmap) => {
                self.custom_tile = Some(Arc::new(bitmap));
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "custom background image unavailable");
                self.custom_tile = None;
                false
            }
        }
    }

    /// Load an optional decal or tile, logging failures.
    pub fn load_optional(path: &Path) -> Option<Arc<Bitmap>> {
        match load_image(path) {
            Ok(bitmap) => Some(Arc::new(bitmap)),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "overlay image unavailable");
                None
            }
        }
    }

    /// Tile source for `mode`: the custom image, then the stone tile, then nothing (solid fill).
    pub fn tile_source(&self, mode: BackgroundMode) -> Option<&Arc<Bitmap>> {
        match mode {
            BackgroundMode::SolidColor => None,
            BackgroundMode::TiledStone => self.stone_tile.as_ref(),
            BackgroundMode::TiledCustomImage => {
                self.custom_tile.as_ref().or(self.stone_tile.as_ref())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;
