use super::*;

#[test]
fn fill_is_clipped_to_target() {
    let mut bm = Bitmap::new(4, 4);
    {
        let mut s = RasterSurface::new(&mut bm);
        s.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), Rgba8::opaque(255, 0, 0));
    }
    assert_eq!(bm.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(bm.pixel(3, 3), Some([255, 0, 0, 255]));
}

#[test]
fn clip_stack_intersects_and_pops() {
    let mut bm = Bitmap::new(8, 1);
    {
        let mut s = RasterSurface::new(&mut bm);
        s.push_clip(Rect::new(0.0, 0.0, 4.0, 1.0));
        s.push_clip(Rect::new(2.0, 0.0, 8.0, 1.0));
        s.fill_rect(s.size().to_rect(), Rgba8::opaque(0, 255, 0));
        s.pop_clip();
        s.pop_clip();
        s.fill_rect(Rect::new(7.0, 0.0, 8.0, 1.0), Rgba8::opaque(0, 0, 255));
    }
    assert_eq!(bm.pixel(1, 0).map(|p| p[3]), Some(0));
    assert_eq!(bm.pixel(2, 0), Some([0, 255, 0, 255]));
    assert_eq!(bm.pixel(3, 0), Some([0, 255, 0, 255]));
    assert_eq!(bm.pixel(4, 0).map(|p| p[3]), Some(0));
    assert_eq!(bm.pixel(7, 0), Some([0, 0, 255, 255]));
}

#[test]
fn draw_image_scales_nearest() {
    let mut src = Bitmap::new(2, 1);
    src.put_pixel(0, 0, [255, 0, 0, 255]);
    src.put_pixel(1, 0, [0, 0, 255, 255]);

    let mut bm = Bitmap::new(4, 2);
    {
        let mut s = RasterSurface::new(&mut bm);
        s.draw_image(&src, Rect::new(0.0, 0.0, 4.0, 2.0));
    }
    assert_eq!(bm.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(1, 1), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(2, 0), Some([0, 0, 255, 255]));
    assert_eq!(bm.pixel(3, 1), Some([0, 0, 255, 255]));
}

#[test]
fn src_atop_fill_leaves_transparent_pixels_alone() {
    let mut bm = Bitmap::new(2, 1);
    bm.put_pixel(0, 0, [0, 0, 255, 255]);
    {
        let mut s = RasterSurface::new(&mut bm);
        s.fill_rect_src_atop(Rect::new(0.0, 0.0, 2.0, 1.0), Rgba8::opaque(255, 0, 0));
    }
    assert_eq!(bm.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(1, 0), Some([0, 0, 0, 0]));
}

#[test]
fn recording_surface_keeps_command_order() {
    let mut s = RecordingSurface::new(Size::new(10.0, 10.0));
    let img = Bitmap::new(3, 2);
    s.draw_bitmap(&img, Point::new(1.0, 1.0));
    s.fill_rect_src_atop(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::TRANSPARENT);
    assert_eq!(
        s.ops,
        vec![
            DrawOp::Image {
                dst: Rect::new(1.0, 1.0, 4.0, 3.0),
                source: Size::new(3.0, 2.0),
            },
            DrawOp::FillSrcAtop {
                rect: Rect::new(0.0, 0.0, 1.0, 1.0),
                color: Rgba8::TRANSPARENT,
            },
        ]
    );
    assert_eq!(s.image_draws(), vec![Rect::new(1.0, 1.0, 4.0, 3.0)]);
}
