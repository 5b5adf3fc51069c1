use crate::foundation::core::{Point, Rect, Rgba8, Size};
use crate::render::bitmap::Bitmap;
use crate::render::composite::{over, src_atop};

/// Drawing target for the overlay compositor.
///
/// Coordinates are in target pixels. Drawing outside the target or outside the active clip is
/// discarded by the surface; callers never clip themselves.
pub trait Surface {
    /// Target extent.
    fn size(&self) -> Size;

    /// Draw `image` scaled into `dst` with source-over blending.
    fn draw_image(&mut self, image: &Bitmap, dst: Rect);

    /// Draw `image` unscaled with its top-left corner at `origin`.
    fn draw_bitmap(&mut self, image: &Bitmap, origin: Point) {
        self.draw_image(image, Rect::from_origin_size(origin, image.size()));
    }

    /// Source-over fill.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    /// Source-atop fill: tints existing coverage without adding any.
    fn fill_rect_src_atop(&mut self, rect: Rect, color: Rgba8);

    /// Restrict subsequent drawing to `rect` (intersected with the current clip).
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}

/// CPU surface drawing straight into a [`Bitmap`].
pub struct RasterSurface<'a> {
    target: &'a mut Bitmap,
    clips: Vec<Rect>,
}

impl<'a> RasterSurface<'a> {
    pub fn new(target: &'a mut Bitmap) -> Self {
        Self {
            target,
            clips: Vec::new(),
        }
    }

    fn clip(&self) -> Rect {
        self.clips.last().copied().unwrap_or_else(|| self.target.rect())
    }

    /// Integer pixel span `[x0, x1) x [y0, y1)` of `rect` inside the current clip.
    fn span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let r = rect.round().intersect(self.clip());
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return None;
        }
        let w = f64::from(self.target.width());
        let h = f64::from(self.target.height());
        let x0 = r.x0.clamp(0.0, w) as u32;
        let x1 = r.x1.clamp(0.0, w) as u32;
        let y0 = r.y0.clamp(0.0, h) as u32;
        let y1 = r.y1.clamp(0.0, h) as u32;
        (x0 < x1 && y0 < y1).then_some((x0, x1, y0, y1))
    }

    fn fill_with(&mut self, rect: Rect, color: Rgba8, blend: fn([u8; 4], [u8; 4]) -> [u8; 4]) {
        let Some((x0, x1, y0, y1)) = self.span(rect) else {
            return;
        };
        let src = color.to_premul();
        let stride = self.target.width() as usize;
        let data = self.target.data_mut();
        for y in y0..y1 {
            for x in x0..x1 {
                let i = ((y as usize) * stride + (x as usize)) * 4;
                let dst = [data[i], data[i + 1], data[i + 2], data[i + 3]];
                data[i..i + 4].copy_from_slice(&blend(dst, src));
            }
        }
    }
}

impl Surface for RasterSurface<'_> {
    fn size(&self) -> Size {
        self.target.size()
    }

    fn draw_image(&mut self, image: &Bitmap, dst: Rect) {
        if image.is_empty() {
            return;
        }
        let dst = dst.round();
        let dst_w = dst.width();
        let dst_h = dst.height();
        if dst_w <= 0.0 || dst_h <= 0.0 {
            return;
        }
        let Some((x0, x1, y0, y1)) = self.span(dst) else {
            return;
        };

        let sx_scale = f64::from(image.width()) / dst_w;
        let sy_scale = f64::from(image.height()) / dst_h;
        let stride = self.target.width() as usize;
        let data = self.target.data_mut();
        for y in y0..y1 {
            let sy = ((f64::from(y) - dst.y0 + 0.5) * sy_scale).floor() as u32;
            let sy = sy.min(image.height() - 1);
            for x in x0..x1 {
                let sx = ((f64::from(x) - dst.x0 + 0.5) * sx_scale).floor() as u32;
                let sx = sx.min(image.width() - 1);
                let Some(src) = image.pixel(sx, sy) else {
                    continue;
                };
                let i = ((y as usize) * stride + (x as usize)) * 4;
                let d = [data[i], data[i + 1], data[i + 2], data[i + 3]];
                data[i..i + 4].copy_from_slice(&over(d, src, 1.0));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.fill_with(rect, color, |dst, src| over(dst, src, 1.0));
    }

    fn fill_rect_src_atop(&mut self, rect: Rect, color: Rgba8) {
        self.fill_with(rect, color, src_atop);
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = rect.round().intersect(self.clip());
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }
}

/// Drawing command captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Image { dst: Rect, source: Size },
    Fill { rect: Rect, color: Rgba8 },
    FillSrcAtop { rect: Rect, color: Rgba8 },
    PushClip(Rect),
    PopClip,
}

/// Surface that records commands instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Destination rectangles of every image draw, in order.
    pub fn image_draws(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { dst, .. } => Some(*dst),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_image(&mut self, image: &Bitmap, dst: Rect) {
        self.ops.push(DrawOp::Image {
            dst,
            source: image.size(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn fill_rect_src_atop(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(DrawOp::FillSrcAtop { rect, color });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
