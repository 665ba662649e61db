use crate::{
    foundation::{
        core::Rect,
        error::{PixError, PixResult},
    },
    matrix::access::{Layout, Matrix, MatrixMut},
};

/// Shared rectangular window into a larger matrix.
///
/// Holds the root matrix memory plus an origin; rows are `matrix_width`
/// elements apart. Nested windows compose their origins against the root.
#[derive(Clone, Copy, Debug)]
pub struct SubView<'a, T> {
    data: &'a [T],
    layout: Layout,
}

/// Mutable rectangular window into a larger matrix.
#[derive(Debug)]
pub struct SubViewMut<'a, T> {
    data: &'a mut [T],
    layout: Layout,
}

impl<'a, T: Copy> SubView<'a, T> {
    pub(crate) fn from_parts(data: &'a [T], layout: Layout) -> Self {
        debug_assert!(data.len() >= layout.matrix_width * layout.matrix_height);
        Self { data, layout }
    }

    /// Nested window; `rect` is relative to this window.
    pub fn sub_view(&self, rect: Rect) -> PixResult<SubView<'a, T>> {
        Ok(Self::from_parts(self.data, self.layout.sub(rect)?))
    }

    /// Top-left corner inside the root matrix.
    pub fn origin(&self) -> (usize, usize) {
        (self.layout.x_begin, self.layout.y_begin)
    }

    /// Row stride, i.e. the root matrix width.
    pub fn matrix_width(&self) -> usize {
        self.layout.matrix_width
    }

    /// Root matrix height.
    pub fn matrix_height(&self) -> usize {
        self.layout.matrix_height
    }
}

impl<'a, T: Copy> SubViewMut<'a, T> {
    pub(crate) fn from_parts(data: &'a mut [T], layout: Layout) -> Self {
        debug_assert!(data.len() >= layout.matrix_width * layout.matrix_height);
        Self { data, layout }
    }

    /// Shared window over the same region.
    pub fn as_sub_view(&self) -> SubView<'_, T> {
        SubView::from_parts(&*self.data, self.layout)
    }

    /// Shorter-lived mutable window over the same region.
    pub fn reborrow(&mut self) -> SubViewMut<'_, T> {
        SubViewMut::from_parts(&mut *self.data, self.layout)
    }

    /// Shared nested window; `rect` is relative to this window.
    pub fn sub_view(&self, rect: Rect) -> PixResult<SubView<'_, T>> {
        self.as_sub_view().sub_view(rect)
    }

    /// Mutable nested window; `rect` is relative to this window.
    pub fn sub_view_mut(&mut self, rect: Rect) -> PixResult<SubViewMut<'_, T>> {
        let layout = self.layout.sub(rect)?;
        Ok(SubViewMut::from_parts(&mut *self.data, layout))
    }

    /// Consumes the window into a nested one with the full lifetime.
    pub fn into_sub_view_mut(self, rect: Rect) -> PixResult<SubViewMut<'a, T>> {
        let layout = self.layout.sub(rect)?;
        Ok(SubViewMut::from_parts(self.data, layout))
    }

    /// Splits into rows `[0, y)` and `[y, height)` of this window.
    ///
    /// Both halves can be written at the same time; they share nothing but
    /// the root stride.
    pub fn split_at_row(self, y: usize) -> PixResult<(SubViewMut<'a, T>, SubViewMut<'a, T>)> {
        let l = self.layout;
        if y == 0 || y >= l.height {
            return Err(PixError::invalid_region(format!(
                "split row {y} leaves an empty half of a {}-row window",
                l.height
            )));
        }
        let cut = (l.y_begin + y) * l.matrix_width;
        let (top, bottom) = self.data.split_at_mut(cut);
        let top_layout = Layout {
            height: y,
            matrix_height: l.y_begin + y,
            ..l
        };
        let bottom_layout = Layout {
            y_begin: 0,
            height: l.height - y,
            matrix_height: l.matrix_height - (l.y_begin + y),
            ..l
        };
        Ok((
            SubViewMut::from_parts(top, top_layout),
            SubViewMut::from_parts(bottom, bottom_layout),
        ))
    }

    /// Top-left corner inside the root matrix (or the split band it came from).
    pub fn origin(&self) -> (usize, usize) {
        (self.layout.x_begin, self.layout.y_begin)
    }

    /// Row stride, i.e. the root matrix width.
    pub fn matrix_width(&self) -> usize {
        self.layout.matrix_width
    }

    /// Root matrix height (or the split band's height in root rows).
    pub fn matrix_height(&self) -> usize {
        self.layout.matrix_height
    }
}

impl<T: Copy> Matrix for SubView<'_, T> {
    type Elem = T;

    fn width(&self) -> usize {
        self.layout.width
    }

    fn height(&self) -> usize {
        self.layout.height
    }

    fn row(&self, y: usize) -> &[T] {
        &self.data[self.layout.row_range(y)]
    }

    fn contiguous(&self) -> Option<&[T]> {
        let range = self.layout.packed_range()?;
        Some(&self.data[range])
    }
}

impl<T: Copy> Matrix for SubViewMut<'_, T> {
    type Elem = T;

    fn width(&self) -> usize {
        self.layout.width
    }

    fn height(&self) -> usize {
        self.layout.height
    }

    fn row(&self, y: usize) -> &[T] {
        &self.data[self.layout.row_range(y)]
    }

    fn contiguous(&self) -> Option<&[T]> {
        let range = self.layout.packed_range()?;
        Some(&self.data[range])
    }
}

impl<T: Copy> MatrixMut for SubViewMut<'_, T> {
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let range = self.layout.row_range(y);
        &mut self.data[range]
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        let range = self.layout.packed_range()?;
        Some(&mut self.data[range])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/sub_view.rs"]
mod tests;
