//! Straight-alpha source-over blending onto an opaque backing store.
//!
//! Only the RGB channels of the destination change. Destination alpha is
//! left as it was: targets are assumed to be opaque framebuffers, so alpha is
//! not accumulated.

use crate::foundation::{
    core::PixelRgba8,
    math::{half_mix, round_to_u8},
};

/// Blends `src` over `dst` using the source pixel's own alpha.
#[inline]
pub fn blend(src: PixelRgba8, dst: &mut PixelRgba8) {
    blend_alpha(src, dst, src.a);
}

/// Blends `src` over `dst` with `alpha` overriding the source alpha.
///
/// `0` leaves `dst` alone, `255` copies the source RGB, `126..=129` take an
/// exact half mix, anything else interpolates in floating point and rounds
/// half away from zero.
#[inline]
pub fn blend_alpha(src: PixelRgba8, dst: &mut PixelRgba8, alpha: u8) {
    match alpha {
        0 => {}
        255 => {
            dst.r = src.r;
            dst.g = src.g;
            dst.b = src.b;
        }
        126..=129 => {
            dst.r = half_mix(src.r, dst.r);
            dst.g = half_mix(src.g, dst.g);
            dst.b = half_mix(src.b, dst.b);
        }
        _ => {
            let a = f32::from(alpha) / 255.0;
            let inv = 1.0 - a;
            dst.r = lerp_channel(src.r, dst.r, a, inv);
            dst.g = lerp_channel(src.g, dst.g, a, inv);
            dst.b = lerp_channel(src.b, dst.b, a, inv);
        }
    }
}

#[inline]
fn lerp_channel(s: u8, d: u8, a: f32, inv: f32) -> u8 {
    round_to_u8(a.mul_add(f32::from(s), inv * f32::from(d)))
}

/// Returns `dst` with `src` blended over it.
#[inline]
pub fn blended(src: PixelRgba8, mut dst: PixelRgba8) -> PixelRgba8 {
    blend(src, &mut dst);
    dst
}

/// Blends a source row over a destination row of the same length.
pub fn blend_row(src: &[PixelRgba8], dst: &mut [PixelRgba8]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, s) in dst.iter_mut().zip(src) {
        blend(*s, d);
    }
}

/// Blends a source row over a destination row with a shared alpha.
pub fn blend_row_alpha(src: &[PixelRgba8], dst: &mut [PixelRgba8], alpha: u8) {
    debug_assert_eq!(src.len(), dst.len());
    if alpha == 0 {
        return;
    }
    for (d, s) in dst.iter_mut().zip(src) {
        blend_alpha(*s, d, alpha);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
