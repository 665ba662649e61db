use crate::{
    foundation::{
        core::Rect,
        error::{PixError, PixResult},
    },
    matrix::{
        access::{Layout, Matrix, MatrixMut, checked_area},
        buffer::alloc_filled,
        sub_view::{SubView, SubViewMut},
        view::{View, ViewMut},
    },
};

/// Owned row-major matrix: decoded images, masks, scratch targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Image<T> {
    /// `width x height` matrix filled with `value`.
    pub fn new(width: usize, height: usize, value: T) -> PixResult<Self> {
        let len = checked_area(width, height)?;
        let data = alloc_filled("image", len, value)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps existing row-major elements; `data.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> PixResult<Self> {
        let len = checked_area(width, height)?;
        if data.len() != len {
            return Err(PixError::dimension_mismatch(format!(
                "image {width}x{height} needs {len} elements, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds each element from its coordinates, row-major.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> PixResult<Self> {
        let len = checked_area(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|err| {
            PixError::allocation_failure(format!("image {width}x{height}: {err}"))
        })?;
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Copy of the element at `(x, y)`, `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Gives back the element vector.
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    /// Shared full view.
    pub fn view(&self) -> View<'_, T> {
        View::from_parts(&self.data, self.width, self.height)
    }

    /// Mutable full view.
    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::from_parts(&mut self.data, self.width, self.height)
    }

    /// Shared rectangular window.
    pub fn sub_view(&self, rect: Rect) -> PixResult<SubView<'_, T>> {
        self.view().sub_view(rect)
    }

    /// Mutable rectangular window.
    pub fn sub_view_mut(&mut self, rect: Rect) -> PixResult<SubViewMut<'_, T>> {
        let layout = Layout::full(self.width, self.height).sub(rect)?;
        Ok(SubViewMut::from_parts(&mut self.data, layout))
    }
}

impl<T: Copy> Matrix for Image<T> {
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
        Some(&self.data)
    }
}

impl<T: Copy> MatrixMut for Image<T> {
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(&mut self.data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/image.rs"]
mod tests;
