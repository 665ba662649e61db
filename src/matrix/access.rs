use std::ops::Range;

use crate::foundation::{
    core::Rect,
    error::{PixError, PixResult},
};

/// Read access to a row-major matrix of `Copy` elements.
///
/// Row and pixel accessors are O(1) address computations. Coordinates are
/// only checked by `debug_assert!`; an out-of-range column inside a sub-view
/// would otherwise land in a neighbouring region, so callers must validate.
pub trait Matrix {
    /// Element type (a pixel or a mask byte).
    type Elem: Copy;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// The `width()` elements of row `y`.
    fn row(&self, y: usize) -> &[Self::Elem];

    /// All elements as one run when rows are packed back to back.
    fn contiguous(&self) -> Option<&[Self::Elem]>;

    /// `(width, height)`.
    fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Element at `(x, y)`.
    fn pixel(&self, x: usize, y: usize) -> &Self::Elem {
        debug_assert!(x < self.width(), "column {x} outside width {}", self.width());
        &self.row(y)[x]
    }
}

/// Write access to a row-major matrix.
pub trait MatrixMut: Matrix {
    /// Mutable row `y`.
    fn row_mut(&mut self, y: usize) -> &mut [Self::Elem];

    /// All elements as one mutable run when rows are packed back to back.
    fn contiguous_mut(&mut self) -> Option<&mut [Self::Elem]>;

    /// Mutable element at `(x, y)`.
    fn pixel_mut(&mut self, x: usize, y: usize) -> &mut Self::Elem {
        debug_assert!(x < self.width(), "column {x} outside width {}", self.width());
        &mut self.row_mut(y)[x]
    }
}

/// Placement of a window inside its root matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) x_begin: usize,
    pub(crate) y_begin: usize,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) matrix_width: usize,
    pub(crate) matrix_height: usize,
}

impl Layout {
    pub(crate) fn full(width: usize, height: usize) -> Self {
        Self {
            x_begin: 0,
            y_begin: 0,
            width,
            height,
            matrix_width: width,
            matrix_height: height,
        }
    }

    /// Window for `rect`, given in this layout's own coordinates.
    pub(crate) fn sub(&self, rect: Rect) -> PixResult<Self> {
        if rect.x_end <= rect.x_begin || rect.y_end <= rect.y_begin {
            return Err(PixError::invalid_region(format!(
                "sub-view rect [{}, {}) x [{}, {}) is empty",
                rect.x_begin, rect.x_end, rect.y_begin, rect.y_end
            )));
        }
        if rect.x_end > self.width || rect.y_end > self.height {
            return Err(PixError::invalid_region(format!(
                "sub-view rect [{}, {}) x [{}, {}) exceeds parent {}x{}",
                rect.x_begin, rect.x_end, rect.y_begin, rect.y_end, self.width, self.height
            )));
        }
        let out = Self {
            x_begin: self.x_begin + rect.x_begin,
            y_begin: self.y_begin + rect.y_begin,
            width: rect.width(),
            height: rect.height(),
            matrix_width: self.matrix_width,
            matrix_height: self.matrix_height,
        };
        debug_assert!(out.x_begin + out.width <= out.matrix_width);
        debug_assert!(out.y_begin + out.height <= out.matrix_height);
        Ok(out)
    }

    pub(crate) fn row_range(&self, y: usize) -> Range<usize> {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = (self.y_begin + y) * self.matrix_width + self.x_begin;
        start..start + self.width
    }

    pub(crate) fn packed_range(&self) -> Option<Range<usize>> {
        if self.width != self.matrix_width {
            return None;
        }
        let start = self.y_begin * self.matrix_width;
        Some(start..start + self.width * self.height)
    }
}

/// Element count of a `width x height` matrix; rejects empty and overflowing shapes.
pub(crate) fn checked_area(width: usize, height: usize) -> PixResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixError::invalid_region(format!(
            "matrix {width}x{height} is empty"
        )));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| PixError::invalid_region(format!("matrix {width}x{height} overflows")))
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/access.rs"]
mod tests;
