use crate::foundation::core::PremulRgba8;
use crate::foundation::math::{add_sat_u8, mul_div255_u8};

/// Porter-Duff "source over" with an extra opacity multiplier on the source.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Porter-Duff "source atop": the source only lands where the destination already has coverage,
/// and the destination alpha is left unchanged.
pub(crate) fn src_atop(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let da = u16::from(dst[3]);
    if da == 0 || src[3] == 0 {
        return dst;
    }

    let inv_sa = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), da);
        let dc = mul_div255_u8(u16::from(dst[i]), inv_sa);
        out[i] = add_sat_u8(sc, dc).min(dst[3]);
    }
    out[3] = dst[3];
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
