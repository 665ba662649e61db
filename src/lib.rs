//! pixmatrix is a small raster library for 8-bit RGBA images and 8-bit masks.
//!
//! Pixels live in caller-owned memory ([`Image`], [`matrix::Buffer`]) and are
//! addressed through borrowed views: a full [`matrix::View`] or a
//! rectangular [`matrix::SubView`] window that shares its parent's rows.
//! Every operation is generic over the [`Matrix`] / [`MatrixMut`] traits, so
//! the same code draws into a whole image or into one window of it.
//!
//! # Layers
//!
//! 1. **Spans** ([`span`]): block-tiered bulk copy and fill.
//! 2. **Views** ([`matrix`]): zero-copy windows, split borrows, arenas.
//! 3. **Compositing**: [`blend`] and its row/alpha variants, mask helpers.
//! 4. **Bulk ops** ([`ops`]): fill, copy, per-pixel transforms.
//! 5. **Geometry**: circles, quarter and arbitrary rotations, flips,
//!    integer scaling, centroid.
//! 6. **Assets**: PNG and friends through `image`, mask blobs.
//! 7. **Pipelines**: JSON op lists ([`OpList`]) driving the `pixmatrix` CLI.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded, allocation-free hot paths**: only constructors and
//!   ops that produce a new image allocate.
//! - **Straight alpha**: pixels are not premultiplied, and blending leaves
//!   the destination alpha as it was.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composite;
mod foundation;
mod geometry;
mod pipeline;

/// Views, sub-views, arenas and owned images.
pub mod matrix;
/// Bulk element operations over matrices.
pub mod ops;
/// Block-tiered copy and fill over slices.
pub mod span;

pub use assets::blob::{parse_mask_blob, write_mask_blob};
pub use assets::codec::{
    decode_gray8, decode_rgba8, encode_png_gray8, encode_png_rgba8, load_rgba8, save_png_rgba8,
};
pub use composite::blend::{blend, blend_alpha, blend_row, blend_row_alpha, blended};
pub use composite::mask::{
    MaskClass, blit_argb8888, classify_rgba, encode_mask, paint_mask, stencil,
};
pub use foundation::core::{Gray8, PixelRgba8, Point2, Rect};
pub use foundation::error::{PixError, PixResult};
pub use foundation::math::Turn;
pub use geometry::centroid::centroid;
pub use geometry::circle::{
    circle_fill, circle_fill_unclipped, circle_outline, circle_outline_unclipped,
};
pub use geometry::flip::{flip_h, flip_h_blend, flip_h_in_place, flip_v, flip_v_blend};
pub use geometry::rotate::{rotate, rotate_blend, rotate90, rotate180, rotate270};
pub use geometry::scale::{Channels, scale_down, scale_up};
pub use matrix::{Image, Matrix, MatrixMut};
pub use pipeline::{Op, OpList};
