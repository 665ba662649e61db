//! Bulk copy and fill over contiguous element runs.
//!
//! Runs are processed in fixed-size blocks of 64 to 1024 bits. The block size
//! is the largest tier that fits the run (capped by what the target handles
//! natively), and a final block overlapping the previous one covers the
//! remainder, so no scalar tail loop is needed. Short runs and element types
//! other than 1 and 4 bytes wide go through [`portable`], which gives
//! bit-identical results.

pub(crate) mod copy;
pub(crate) mod fill;
pub mod portable;
pub(crate) mod tier;

pub use copy::copy;
pub use fill::{fill, fill_dual, fill_u8, fill_u32};
pub use tier::SpanTier;
