//! Raster geometry: circles, rotations, flips, integer scaling, centroid.

pub(crate) mod centroid;
pub(crate) mod circle;
pub(crate) mod flip;
pub(crate) mod rotate;
pub(crate) mod scale;
