use crate::foundation::core::Rect;
use crate::render::bitmap::Bitmap;
use crate::render::surface::Surface;

/// Vertical offsets at which a `tile_height` tall tile is drawn to cover `target_height`.
///
/// The last tile may overhang the target.
pub fn tile_offsets(tile_height: u32, target_height: u32) -> Vec<u32> {
    if tile_height == 0 {
        return Vec::new();
    }
    (0..target_height).step_by(tile_height as usize).collect()
}

/// Cover a `width` x `height` area from the origin with `tile`, stacked vertically.
///
/// Each copy is stretched to the full width, so a tile narrower than the column is widened
/// rather than repeated horizontally. Only the vertical axis repeats.
pub fn tile_vertically(surface: &mut dyn Surface, tile: &Bitmap, width: u32, height: u32) {
    let tile_h = tile.height();
    for y in tile_offsets(tile_h, height) {
        let dst = Rect::new(
            0.0,
            f64::from(y),
            f64::from(width),
            f64::from(y) + f64::from(tile_h),
        );
        surface.draw_image(tile, dst);
    }
}
