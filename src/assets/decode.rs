use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{HybridError, HybridResult};
use crate::render::bitmap::{Bitmap, premultiply_rgba8_in_place};

/// Decode an encoded image (PNG, JPEG, ...) into a premultiplied [`Bitmap`].
pub fn decode_image(bytes: &[u8]) -> HybridResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Bitmap::from_premul(width, height, rgba8_premul)
}

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> HybridResult<Bitmap> {
    let bytes = std::fs::read(path)
        .map_err(|e| HybridError::asset_load(format!("read image {}: {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| HybridError::asset_load(format!("{}: {e}", path.display())))
}
