//! Stencil masks: classifying RGBA art into mask codes and painting
//! highlighted regions through them.

use crate::{
    composite::blend::blend,
    foundation::{
        core::{Gray8, PixelRgba8},
        error::PixResult,
    },
    matrix::{Matrix, MatrixMut},
    ops::{transform, transform_with_dst},
};

/// Meaning of a mask byte produced by [`classify_rgba`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MaskClass {
    /// Nothing to draw.
    Clear = 0,
    /// Hard outline, drawn opaque.
    Boundary = 1,
    /// Interior region, drawn blended.
    Soft = 2,
}

impl MaskClass {
    /// Decodes a mask byte; unknown codes are `None`.
    pub fn from_code(code: Gray8) -> Option<Self> {
        match code {
            0 => Some(Self::Clear),
            1 => Some(Self::Boundary),
            2 => Some(Self::Soft),
            _ => None,
        }
    }

    /// Mask byte for this class.
    pub fn code(self) -> Gray8 {
        self as Gray8
    }
}

/// Buckets an authored pixel: transparent, black outline, or colored region.
pub fn classify_rgba(px: PixelRgba8) -> Gray8 {
    let class = if px.a == 0 {
        MaskClass::Clear
    } else if px.r == 0 && px.g == 0 && px.b == 0 {
        MaskClass::Boundary
    } else {
        MaskClass::Soft
    };
    class.code()
}

/// Encodes an RGBA image into mask codes with [`classify_rgba`].
pub fn encode_mask<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = Gray8> + ?Sized,
{
    transform(src, dst, classify_rgba)
}

/// Writes `color` wherever the mask is nonzero and keeps `dst` elsewhere.
pub fn stencil<S, D>(mask: &S, dst: &mut D, color: PixelRgba8) -> PixResult<()>
where
    S: Matrix<Elem = Gray8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    transform_with_dst(mask, dst, |m, d| if m != 0 { color } else { d })
}

/// Paints a classified mask: boundaries overwrite with `boundary`, soft
/// regions blend `soft` over the background, clear cells (and unknown
/// codes) keep it.
pub fn paint_mask<S, D>(
    mask: &S,
    dst: &mut D,
    boundary: PixelRgba8,
    soft: PixelRgba8,
) -> PixResult<()>
where
    S: Matrix<Elem = Gray8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    transform_with_dst(mask, dst, |m, mut d| match MaskClass::from_code(m) {
        Some(MaskClass::Boundary) => boundary,
        Some(MaskClass::Soft) => {
            blend(soft, &mut d);
            d
        }
        Some(MaskClass::Clear) | None => d,
    })
}

/// Packs RGBA pixels into `0xAARRGGBB` words for a window surface.
pub fn blit_argb8888<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = u32> + ?Sized,
{
    transform(src, dst, PixelRgba8::to_argb8888)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/mask.rs"]
mod tests;
