use crate::{
    foundation::{
        core::Rect,
        error::{PixError, PixResult},
    },
    matrix::{
        access::{Layout, Matrix, MatrixMut, checked_area},
        sub_view::{SubView, SubViewMut},
    },
};

/// Shared view of a whole `width x height` matrix (stride == width).
#[derive(Clone, Copy, Debug)]
pub struct View<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
}

/// Mutable view of a whole `width x height` matrix (stride == width).
#[derive(Debug)]
pub struct ViewMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
}

impl<'a, T: Copy> View<'a, T> {
    pub(crate) fn from_parts(data: &'a [T], width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Views the first `width * height` elements of `data`.
    pub fn new(width: usize, height: usize, data: &'a [T]) -> PixResult<Self> {
        let len = checked_area(width, height)?;
        let data = data.get(..len).ok_or_else(|| short_data(width, height, data.len()))?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Rectangular window; the result borrows the same memory.
    pub fn sub_view(&self, rect: Rect) -> PixResult<SubView<'a, T>> {
        let layout = Layout::full(self.width, self.height).sub(rect)?;
        Ok(SubView::from_parts(self.data, layout))
    }

    /// The whole matrix as a sub-view.
    pub fn as_sub_view(&self) -> SubView<'a, T> {
        SubView::from_parts(self.data, Layout::full(self.width, self.height))
    }

    /// Backing elements in row-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T: Copy> ViewMut<'a, T> {
    pub(crate) fn from_parts(data: &'a mut [T], width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Views the first `width * height` elements of `data` mutably.
    pub fn new(width: usize, height: usize, data: &'a mut [T]) -> PixResult<Self> {
        let len = checked_area(width, height)?;
        let available = data.len();
        let data = data
            .get_mut(..len)
            .ok_or_else(|| short_data(width, height, available))?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Shared view of the same matrix.
    pub fn as_view(&self) -> View<'_, T> {
        View {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Shorter-lived mutable view of the same matrix.
    pub fn reborrow(&mut self) -> ViewMut<'_, T> {
        ViewMut {
            data: &mut *self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Shared rectangular window.
    pub fn sub_view(&self, rect: Rect) -> PixResult<SubView<'_, T>> {
        self.as_view().sub_view(rect)
    }

    /// Mutable rectangular window.
    pub fn sub_view_mut(&mut self, rect: Rect) -> PixResult<SubViewMut<'_, T>> {
        let layout = Layout::full(self.width, self.height).sub(rect)?;
        Ok(SubViewMut::from_parts(&mut *self.data, layout))
    }

    /// The whole matrix as a mutable sub-view.
    pub fn into_sub_view_mut(self) -> SubViewMut<'a, T> {
        SubViewMut::from_parts(self.data, Layout::full(self.width, self.height))
    }

    /// Splits into rows `[0, y)` and `[y, height)`.
    pub fn split_at_row(self, y: usize) -> PixResult<(SubViewMut<'a, T>, SubViewMut<'a, T>)> {
        self.into_sub_view_mut().split_at_row(y)
    }

    /// Backing elements in row-major order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

fn short_data(width: usize, height: usize, len: usize) -> PixError {
    PixError::invalid_region(format!(
        "view {width}x{height} needs {} elements, buffer holds {len}",
        width * height
    ))
}

impl<T: Copy> Matrix for View<'_, T> {
    type Elem = T;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row(&self, y: usize) -> &[T] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    fn contiguous(&self) -> Option<&[T]> {
        Some(self.data)
    }
}

impl<T: Copy> Matrix for ViewMut<'_, T> {
    type Elem = T;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row(&self, y: usize) -> &[T] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    fn contiguous(&self) -> Option<&[T]> {
        Some(&*self.data)
    }
}

impl<T: Copy> MatrixMut for ViewMut<'_, T> {
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut *self.data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/view.rs"]
mod tests;
