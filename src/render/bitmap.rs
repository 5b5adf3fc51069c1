use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{PremulRgba8, Rect, Rgba8, Size};
use crate::foundation::error::{HybridError, HybridResult};

/// Owned raster image in premultiplied RGBA8.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Bitmap filled with a single straight-alpha color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let mut out = Self::new(width, height);
        out.fill(color.to_premul());
        out
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> HybridResult<Self> {
        if data.len() != byte_len(width, height) {
            return Err(HybridError::validation(
                "bitmap data must be width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap straight-alpha RGBA8 bytes, premultiplying them.
    pub fn from_straight(width: u32, height: u32, mut data: Vec<u8>) -> HybridResult<Self> {
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Bounds at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        let i = self.index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, px: PremulRgba8) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, px: PremulRgba8) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Copy out the `width` x `height` region starting at `(x, y)`, clamped to the bitmap.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);

        let mut data = Vec::with_capacity(byte_len(width, height));
        for row in y..y + height {
            let start = ((row as usize) * (self.width as usize) + (x as usize)) * 4;
            data.extend_from_slice(&self.data[start..start + (width as usize) * 4]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Straight-alpha RGBA8 bytes, for export.
    pub fn to_straight(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Encode as PNG at `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> HybridResult<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_straight())
            .ok_or_else(|| HybridError::validation("bitmap buffer does not match its size"))?;
        img.save(path)
            .with_context(|| format!("write png {}", path.display()))?;
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
