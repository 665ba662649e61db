use crate::{
    composite::blend::{blend, blend_row},
    foundation::{
        core::PixelRgba8,
        error::{PixResult, ensure_same_dims},
    },
    matrix::{Matrix, MatrixMut},
    span,
};

/// Mirrors columns: `dst(x, y) = src(width - 1 - x, y)`.
pub fn flip_h<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_same_dims("flip_h", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(y).iter().rev()) {
            *d = s;
        }
    }
    Ok(())
}

/// Mirrors columns of `dst` in place by swapping across the half width.
pub fn flip_h_in_place<M: MatrixMut + ?Sized>(dst: &mut M) {
    for y in 0..dst.height() {
        dst.row_mut(y).reverse();
    }
}

/// Mirrors rows: `dst(x, y) = src(x, height - 1 - y)`.
///
/// Needs a separate destination; rows are copied whole.
pub fn flip_v<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_same_dims("flip_v", src.dims(), dst.dims())?;
    let last = src.height().saturating_sub(1);
    for y in 0..src.height() {
        span::copy(src.row(y), dst.row_mut(last - y));
    }
    Ok(())
}

/// [`flip_h`] that blends instead of overwriting.
pub fn flip_h_blend<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    ensure_same_dims("flip_h_blend", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(y).iter().rev()) {
            blend(s, d);
        }
    }
    Ok(())
}

/// [`flip_v`] that blends instead of overwriting.
pub fn flip_v_blend<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    ensure_same_dims("flip_v_blend", src.dims(), dst.dims())?;
    let last = src.height().saturating_sub(1);
    for y in 0..src.height() {
        blend_row(src.row(y), dst.row_mut(last - y));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flip.rs"]
mod tests;
