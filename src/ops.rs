//! Bulk element operations over any [`Matrix`](crate::Matrix) / [`MatrixMut`](crate::MatrixMut).
//!
//! Everything here is a single row-major pass on the calling thread.
//! Operations that pair a source with a destination check that both have
//! the same shape and fail with [`PixError::DimensionMismatch`](crate::PixError)
//! otherwise.

pub(crate) mod copy;
pub(crate) mod fill;
pub(crate) mod transform;
pub(crate) mod visit;

pub use copy::{copy, copy_blend, copy_blend_alpha};
pub use fill::{fill, fill_blend, fill_if};
pub use transform::{transform, transform_scale_up, transform_scale_up_blend, transform_with_dst};
pub use visit::{for_each_pixel, for_each_xy, generate_xy};
