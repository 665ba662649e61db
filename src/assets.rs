//! Moving pixels in and out of the matrix model: compressed images through
//! the `image` crate and pre-baked mask blobs.

pub(crate) mod blob;
pub(crate) mod codec;
