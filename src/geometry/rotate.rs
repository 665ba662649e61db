//! Quarter-turn permutations and arbitrary-angle rotation.
//!
//! Screen space is y-down, so a positive quarter turn is clockwise on screen.

use crate::{
    composite::blend::blend,
    foundation::{
        core::{PixelRgba8, Point2},
        error::{PixResult, ensure_same_dims},
        math::Turn,
    },
    matrix::{Matrix, MatrixMut},
};

fn ensure_swapped_dims<S, D>(op: &str, src: &S, dst: &D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: Matrix + ?Sized,
{
    ensure_same_dims(op, (src.height(), src.width()), dst.dims())
}

/// Rotates a quarter turn clockwise into a `height x width` destination.
pub fn rotate90<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_swapped_dims("rotate90", src, dst)?;
    let last = src.height().saturating_sub(1);
    for y in 0..dst.height() {
        for (x, d) in dst.row_mut(y).iter_mut().enumerate() {
            *d = src.row(last - x)[y];
        }
    }
    Ok(())
}

/// Rotates a half turn into a destination of the same shape.
pub fn rotate180<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_same_dims("rotate180", src.dims(), dst.dims())?;
    let last = src.height().saturating_sub(1);
    for y in 0..dst.height() {
        for (d, &s) in dst.row_mut(y).iter_mut().zip(src.row(last - y).iter().rev()) {
            *d = s;
        }
    }
    Ok(())
}

/// Rotates a quarter turn counter-clockwise into a `height x width` destination.
pub fn rotate270<S, D>(src: &S, dst: &mut D) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    ensure_swapped_dims("rotate270", src, dst)?;
    let last = src.width().saturating_sub(1);
    for y in 0..dst.height() {
        for (x, d) in dst.row_mut(y).iter_mut().enumerate() {
            *d = src.row(x)[last - y];
        }
    }
    Ok(())
}

/// Rotates `src` by `angle` around `src_pivot`, landing the pivot on
/// `dst_pivot`, and overwrites the covered destination pixels.
///
/// Every destination pixel is mapped back into the source (inverse
/// sampling, nearest pixel). Destination pixels whose source position falls
/// outside the source are left untouched, so the caller decides the
/// background. Source and destination may have any shapes.
pub fn rotate<S, D>(src: &S, dst: &mut D, angle: Turn, src_pivot: Point2, dst_pivot: Point2)
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    inverse_map(src, dst, angle, src_pivot, dst_pivot, |s, d| *d = s);
}

/// Like [`rotate`], but blends each sampled pixel over the destination.
pub fn rotate_blend<S, D>(src: &S, dst: &mut D, angle: Turn, src_pivot: Point2, dst_pivot: Point2)
where
    S: Matrix<Elem = PixelRgba8> + ?Sized,
    D: MatrixMut<Elem = PixelRgba8> + ?Sized,
{
    inverse_map(src, dst, angle, src_pivot, dst_pivot, blend);
}

fn inverse_map<S, D>(
    src: &S,
    dst: &mut D,
    angle: Turn,
    src_pivot: Point2,
    dst_pivot: Point2,
    mut put: impl FnMut(S::Elem, &mut D::Elem),
) where
    S: Matrix + ?Sized,
    D: MatrixMut + ?Sized,
{
    let (sin, cos) = angle.sin_cos();
    let (sw, sh) = (src.width() as f32, src.height() as f32);
    let x0 = -dst_pivot.x;
    let mut dysin = -dst_pivot.y * sin;
    let mut dycos = -dst_pivot.y * cos;
    for dy in 0..dst.height() {
        let mut sx = cos.mul_add(x0, dysin) + src_pivot.x;
        let mut sy = (-sin).mul_add(x0, dycos) + src_pivot.y;
        for d in dst.row_mut(dy) {
            let (fx, fy) = ((sx + 0.5).floor(), (sy + 0.5).floor());
            if fx >= 0.0 && fy >= 0.0 && fx < sw && fy < sh {
                put(*src.pixel(fx as usize, fy as usize), d);
            }
            sx += cos;
            sy -= sin;
        }
        dysin += sin;
        dycos += cos;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotate.rs"]
mod tests;
