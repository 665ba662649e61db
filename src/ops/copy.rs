use crate::{
    composite::blend::{blend_row, blend_row_alpha},
    foundation::{
        core::PixelRgba8,
        error::{PixResult, ensure_same_dims},
    },
    matrix::{Matrix, MatrixMut},
    span,
};

/// Copies `src` into `dst` element for element.
///
/// Packed matrices are copied as one run; windows are copied row by row.
pub fn copy<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_same_dims("copy", src.dims(), dst.dims())?;
    if let (Some(s), Some(d)) = (src.contiguous(), dst.contiguous_mut()) {
        span::copy(s, d);
        return Ok(());
    }
    for y in 0..src.height() {
        span::copy(src.row(y), dst.row_mut(y));
    }
    Ok(())
}

/// Blends every pixel of `src` over the matching pixel of `dst`.
pub fn copy_blend<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    ensure_same_dims("copy_blend", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        blend_row(src.row(y), dst.row_mut(y));
    }
    Ok(())
}

/// Blends `src` over `dst` with one alpha for every pixel (fades).
pub fn copy_blend_alpha<S, D>(src: &S, dst: &mut D, alpha: u8) -> PixResult<()>
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    ensure_same_dims("copy_blend_alpha", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        blend_row_alpha(src.row(y), dst.row_mut(y), alpha);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ops/copy.rs"]
mod tests;
