//! Integer magnification by block replication and reduction by box mean.

use crate::{
    foundation::{core::PixelRgba8, error::PixResult},
    matrix::{Matrix, MatrixMut},
    ops::{copy, transform::check_scaled_dims, transform_scale_up},
};

/// Elements made of independent 8-bit channels.
///
/// [`scale_down`] averages each channel on its own.
pub trait Channels: Copy {
    /// Number of channels, at most 4.
    const COUNT: usize;

    /// Channel `index` (`0..COUNT`).
    fn channel(self, index: usize) -> u8;

    /// Builds an element from per-channel values.
    fn from_channels(channels: [u8; 4]) -> Self;
}

impl Channels for PixelRgba8 {
    const COUNT: usize = 4;

    fn channel(self, index: usize) -> u8 {
        self.to_array()[index]
    }

    fn from_channels(channels: [u8; 4]) -> Self {
        Self::from_array(channels)
    }
}

impl Channels for u8 {
    const COUNT: usize = 1;

    fn channel(self, _index: usize) -> u8 {
        self
    }

    fn from_channels(channels: [u8; 4]) -> Self {
        channels[0]
    }
}

/// Replicates every source element into a `scale x scale` destination block.
///
/// `dst` must be exactly `scale` times larger on both axes; `scale == 1` is
/// a plain copy.
pub fn scale_up<S, D>(src: &S, dst: &mut D, scale: usize) -> PixResult<()>
where
    S: Matrix + ?Sized,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    if scale == 1 {
        return copy(src, dst);
    }
    transform_scale_up(src, dst, scale, |v| v)
}

/// Writes the per-channel mean of each `scale x scale` source block.
///
/// Means are exact integer quotients, truncated. `src` must be exactly
/// `scale` times larger than `dst` on both axes; `scale == 1` is a plain copy.
pub fn scale_down<S, D>(src: &S, dst: &mut D, scale: usize) -> PixResult<()>
where
    S: Matrix + ?Sized,
    S::Elem: Channels,
    D: MatrixMut<Elem = S::Elem> + ?Sized,
{
    check_scaled_dims("scale_down", dst, src, scale)?;
    if scale == 1 {
        return copy(src, dst);
    }
    let area = (scale as u64) * (scale as u64);
    let count = <S::Elem as Channels>::COUNT;
    for dy in 0..dst.height() {
        for (dx, d) in dst.row_mut(dy).iter_mut().enumerate() {
            let mut sums = [0u64; 4];
            for sy in dy * scale..(dy + 1) * scale {
                for &s in &src.row(sy)[dx * scale..(dx + 1) * scale] {
                    for (c, sum) in sums.iter_mut().enumerate().take(count) {
                        *sum += u64::from(s.channel(c));
                    }
                }
            }
            *d = <S::Elem as Channels>::from_channels(sums.map(|sum| (sum / area) as u8));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
