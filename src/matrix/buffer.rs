use crate::{
    foundation::error::{PixError, PixResult},
    matrix::{
        access::checked_area,
        view::{View, ViewMut},
    },
};

/// Owned element arena that views are carved from.
///
/// The tag only feeds diagnostics: reservations and releases are reported as
/// `tracing` debug events so leaks and oversized arenas show up in logs.
#[derive(Debug)]
pub struct Buffer<T> {
    tag: &'static str,
    data: Vec<T>,
}

impl<T: Copy + Default> Buffer<T> {
    /// Reserves `len` default-initialised elements.
    ///
    /// Fails with [`PixError::AllocationFailure`] when the allocator refuses.
    pub fn with_len(tag: &'static str, len: usize) -> PixResult<Self> {
        let data = alloc_filled(tag, len, T::default())?;
        tracing::debug!(
            tag,
            len,
            bytes = len * size_of::<T>(),
            "reserved pixel buffer"
        );
        Ok(Self { tag, data })
    }

    /// Grows the arena to at least `len` elements; never shrinks.
    pub fn grow(&mut self, len: usize) -> PixResult<()> {
        if len <= self.data.len() {
            return Ok(());
        }
        let extra = len - self.data.len();
        self.data.try_reserve_exact(extra).map_err(|err| {
            tracing::warn!(tag = self.tag, len, "buffer growth refused");
            PixError::allocation_failure(format!("{}: grow to {len} elements: {err}", self.tag))
        })?;
        self.data.resize(len, T::default());
        tracing::debug!(tag = self.tag, len, "grew pixel buffer");
        Ok(())
    }

    /// Diagnostic tag given at creation.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Number of elements in the arena.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the arena holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whole arena.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Whole arena, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Shared view over the front of the arena.
    pub fn view(&self, width: usize, height: usize) -> PixResult<View<'_, T>> {
        View::new(width, height, &self.data)
    }

    /// Mutable view over the front of the arena.
    pub fn view_mut(&mut self, width: usize, height: usize) -> PixResult<ViewMut<'_, T>> {
        ViewMut::new(width, height, &mut self.data)
    }

    /// Carves consecutive, non-overlapping views out of the arena.
    pub fn carve_mut(&mut self, shapes: &[(usize, usize)]) -> PixResult<Vec<ViewMut<'_, T>>> {
        let total = shapes.iter().try_fold(0usize, |acc, &(w, h)| {
            let area = checked_area(w, h)?;
            acc.checked_add(area)
                .ok_or_else(|| PixError::invalid_region("carved views overflow"))
        })?;
        if total > self.data.len() {
            return Err(PixError::invalid_region(format!(
                "{}: carving {total} elements from a {}-element buffer",
                self.tag,
                self.data.len()
            )));
        }

        let mut rest: &mut [T] = &mut self.data;
        let mut views = Vec::with_capacity(shapes.len());
        for &(w, h) in shapes {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(w * h);
            views.push(ViewMut::new(w, h, head)?);
            rest = tail;
        }
        Ok(views)
    }

    /// Releases the arena; equivalent to dropping it.
    pub fn release(self) {}
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        tracing::debug!(tag = self.tag, len = self.data.len(), "released pixel buffer");
    }
}

/// `len` copies of `value`, reporting allocator refusal as an error.
pub(crate) fn alloc_filled<T: Copy>(tag: &str, len: usize, value: T) -> PixResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|err| {
        tracing::warn!(tag, len, "buffer reservation refused");
        PixError::allocation_failure(format!("{tag}: {len} elements: {err}"))
    })?;
    data.resize(len, value);
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/buffer.rs"]
mod tests;
