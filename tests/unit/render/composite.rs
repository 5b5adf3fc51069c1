use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn src_atop_never_adds_coverage() {
    let dst = [0, 0, 0, 0];
    let tint = [255, 0, 0, 255];
    assert_eq!(src_atop(dst, tint), dst);
}

#[test]
fn src_atop_opaque_tint_recolors_opaque_dst() {
    let dst = [0, 0, 255, 255];
    let tint = [255, 0, 0, 255];
    assert_eq!(src_atop(dst, tint), [255, 0, 0, 255]);
}

#[test]
fn src_atop_keeps_dst_alpha() {
    let dst = [0, 0, 128, 128];
    let tint = [128, 0, 0, 128];
    let out = src_atop(dst, tint);
    assert_eq!(out[3], 128);
    assert_eq!(out[0], 64);
    assert_eq!(out[2], 64);
}
