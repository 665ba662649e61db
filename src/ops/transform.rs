use crate::{
    composite::blend::blend,
    foundation::{
        core::PixelRgba8,
        error::{PixError, PixResult, ensure_same_dims},
    },
    matrix::{Matrix, MatrixMut},
    span,
};

/// Writes `f(src)` into every destination element.
///
/// Source and destination are visited pairwise, once each, in row-major
/// order. Element types may differ: gray masks become pixels, pixels become
/// mask classes, and so on.
pub fn transform<S, D, F>(src: &S, dst: &mut D, mut f: F) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    F: FnMut(S::Elem) -> D::Elem,
{
    ensure_same_dims("transform", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(y)) {
            *d = f(s);
        }
    }
    Ok(())
}

/// Writes `f(src, dst)` into every destination element.
///
/// Having the current destination value at hand lets one pass express masked
/// writes ("mask set: draw color, else keep background") and custom blends.
pub fn transform_with_dst<S, D, F>(src: &S, dst: &mut D, mut f: F) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    F: FnMut(S::Elem, D::Elem) -> D::Elem,
{
    ensure_same_dims("transform_with_dst", src.dims(), dst.dims())?;
    for y in 0..src.height() {
        for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(y)) {
            *d = f(s, *d);
        }
    }
    Ok(())
}

/// Like [`transform`], but each source element covers a `scale x scale`
/// destination block. `f` runs once per source element.
pub fn transform_scale_up<S, D, F>(src: &S, dst: &mut D, scale: usize, mut f: F) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
    F: FnMut(S::Elem) -> D::Elem,
{
    check_scaled_dims("transform_scale_up", src, dst, scale)?;
    for sy in 0..src.height() {
        for (sx, &s) in src.row(sy).iter().enumerate() {
            let v = f(s);
            for dy in sy * scale..(sy + 1) * scale {
                span::fill(&mut dst.row_mut(dy)[sx * scale..(sx + 1) * scale], v);
            }
        }
    }
    Ok(())
}

/// Like [`transform_scale_up`], but the produced pixel is blended over each
/// pixel of its destination block instead of replacing it.
pub fn transform_scale_up_blend<S, D, F>(
    src: &S,
    dst: &mut D,
    scale: usize,
    mut f: F,
) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
    F: FnMut(S::Elem) -> PixelRgba8,
{
    check_scaled_dims("transform_scale_up_blend", src, dst, scale)?;
    for sy in 0..src.height() {
        for (sx, &s) in src.row(sy).iter().enumerate() {
            let v = f(s);
            if v.a == 0 {
                continue;
            }
            for dy in sy * scale..(sy + 1) * scale {
                for d in &mut dst.row_mut(dy)[sx * scale..(sx + 1) * scale] {
                    blend(v, d);
                }
            }
        }
    }
    Ok(())
}

/// Checks that `large` is exactly `small` magnified by `scale` on both axes.
pub(crate) fn check_scaled_dims<S, L>(op: &str, small: &S, large: &L, scale: usize) -> PixResult<()>
where
    S: Matrix + ?Sized,
    L: Matrix + ?Sized,
{
    if scale == 0 {
        return Err(PixError::validation(format!("{op}: scale must be >= 1")));
    }
    let want = (
        small.width().checked_mul(scale),
        small.height().checked_mul(scale),
    );
    if want != (Some(large.width()), Some(large.height())) {
        return Err(PixError::dimension_mismatch(format!(
            "{op}: {}x{} at scale {scale} is {}x{}, got {}x{}",
            small.width(),
            small.height(),
            small.width().saturating_mul(scale),
            small.height().saturating_mul(scale),
            large.width(),
            large.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ops/transform.rs"]
mod tests;
