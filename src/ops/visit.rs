use crate::matrix::{Matrix, MatrixMut};

/// Calls `f` with every element of `src` in row-major order.
pub fn for_each_pixel<S: Matrix + ?Sized>(src: &S, mut f: impl FnMut(S::Elem)) {
    for y in 0..src.height() {
        for &e in src.row(y) {
            f(e);
        }
    }
}

/// Calls `f(x, y, element)` for every coordinate in row-major order.
pub fn for_each_xy<S: Matrix + ?Sized>(src: &S, mut f: impl FnMut(usize, usize, S::Elem)) {
    for y in 0..src.height() {
        for (x, &e) in src.row(y).iter().enumerate() {
            f(x, y, e);
        }
    }
}

/// Stores `f(x, y)` at every coordinate of `dst` in row-major order.
pub fn generate_xy<D: MatrixMut + ?Sized>(dst: &mut D, mut f: impl FnMut(usize, usize) -> D::Elem) {
    for y in 0..dst.height() {
        for (x, e) in dst.row_mut(y).iter_mut().enumerate() {
            *e = f(x, y);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ops/visit.rs"]
mod tests;
