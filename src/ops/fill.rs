use crate::{
    composite::blend::blend,
    foundation::core::PixelRgba8,
    matrix::MatrixMut,
    span,
};

/// Sets every element of `dst` to `value`, without blending.
pub fn fill<M: MatrixMut + ?Sized>(dst: &mut M, value: M::Elem) {
    if let Some(all) = dst.contiguous_mut() {
        span::fill(all, value);
        return;
    }
    for y in 0..dst.height() {
        span::fill(dst.row_mut(y), value);
    }
}

/// Blends `color` over every pixel of `dst`.
pub fn fill_blend<M: MatrixMut<Elem = PixelRgba8> + ?Sized>(dst: &mut M, color: PixelRgba8) {
    if color.a == 0 {
        return;
    }
    for y in 0..dst.height() {
        for px in dst.row_mut(y) {
            blend(color, px);
        }
    }
}

/// Overwrites with `value` every element for which `pred` holds.
pub fn fill_if<M: MatrixMut + ?Sized>(
    dst: &mut M,
    value: M::Elem,
    mut pred: impl FnMut(M::Elem) -> bool,
) {
    for y in 0..dst.height() {
        for e in dst.row_mut(y) {
            if pred(*e) {
                *e = value;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ops/fill.rs"]
mod tests;
