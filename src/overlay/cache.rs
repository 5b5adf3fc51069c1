use std::sync::Arc;

use crate::config::BackgroundMode;
use crate::foundation::core::Rgba8;
use crate::overlay::tile::tile_vertically;
use crate::render::bitmap::Bitmap;
use crate::render::surface::{RasterSurface, Surface};

/// Inputs the cached background depends on. The width is fixed per cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackgroundKey {
    pub height: u32,
    pub mode: BackgroundMode,
    pub color: Rgba8,
}

#[derive(Debug)]
struct Entry {
    width: u32,
    key: BackgroundKey,
    bitmap: Arc<Bitmap>,
}

/// Single-slot cache of the column background.
///
/// Tiling the background is the expensive part of a frame; it only happens again when the
/// height, mode or color changes.
#[derive(Debug, Default)]
pub struct BackgroundCache {
    entry: Option<Entry>,
    rebuilds: u64,
}

impl BackgroundCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The background for `key`, rebuilt only when `key` (or `width`) changed since last call.
    pub fn get_or_build(
        &mut self,
        width: u32,
        key: BackgroundKey,
        tile: Option<&Bitmap>,
    ) -> Arc<Bitmap> {
        if let Some(entry) = &self.entry
            && entry.key == key
            && entry.width == width
        {
            return Arc::clone(&entry.bitmap);
        }

        let bitmap = Arc::new(build_background(width, key, tile));
        self.rebuilds += 1;
        self.entry = Some(Entry {
            width,
            key,
            bitmap: Arc::clone(&bitmap),
        });
        bitmap
    }

    /// Drop the cached bitmap, e.g. after the tile image changed.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of times the background was built.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn current(&self) -> Option<&Arc<Bitmap>> {
        self.entry.as_ref().map(|e| &e.bitmap)
    }
}

#[tracing::instrument(level = "debug", skip(tile))]
fn build_background(width: u32, key: BackgroundKey, tile: Option<&Bitmap>) -> Bitmap {
    let mut bitmap = Bitmap::new(width, key.height);
    let mut surface = RasterSurface::new(&mut bitmap);
    match tile.filter(|t| !t.is_empty()) {
        Some(tile) => tile_vertically(&mut surface, tile, width, key.height),
        None => {
            let rect = surface.size().to_rect();
            surface.fill_rect(rect, key.color);
        }
    }
    bitmap
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/cache.rs"]
mod tests;
