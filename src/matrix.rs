//! Non-owning matrix views over pixel and mask memory.
//!
//! A [`View`] covers a whole row-major matrix; a [`SubView`] is a rectangular
//! window that keeps the root matrix's row stride. Both come in shared and
//! mutable flavours and implement [`Matrix`] / [`MatrixMut`], which every
//! bulk and geometric operation is generic over. Memory is owned by a
//! [`Buffer`] arena or an [`Image`].

pub(crate) mod access;
pub(crate) mod buffer;
pub(crate) mod image;
pub(crate) mod sub_view;
pub(crate) mod view;

pub use access::{Matrix, MatrixMut};
pub use buffer::Buffer;
pub use image::Image;
pub use sub_view::{SubView, SubViewMut};
pub use view::{View, ViewMut};
