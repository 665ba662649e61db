//! Pre-baked mask tables.
//!
//! A blob is a plain concatenation of records, each
//! `[u32 LE width][u32 LE height][width * height mask bytes]`, with no
//! header or padding.

use crate::{
    foundation::{
        core::Gray8,
        error::{PixError, PixResult},
    },
    matrix::{Image, Matrix},
};

fn read_u32<'a>(rest: &mut &'a [u8], what: &str, offset: usize) -> PixResult<u32> {
    let current: &'a [u8] = *rest;
    let Some((word, tail)) = current.split_first_chunk::<4>() else {
        return Err(PixError::decode(format!(
            "mask blob truncated reading {what} at byte {offset}"
        )));
    };
    *rest = tail;
    Ok(u32::from_le_bytes(*word))
}

/// Splits a blob into its masks, in order.
///
/// Zero-sized records and payloads shorter than their header promises fail
/// with [`PixError::Decode`]. An empty blob holds no masks.
pub fn parse_mask_blob(bytes: &[u8]) -> PixResult<Vec<Image<Gray8>>> {
    let mut rest = bytes;
    let mut masks = Vec::new();
    while !rest.is_empty() {
        let offset = bytes.len() - rest.len();
        let width = read_u32(&mut rest, "width", offset)? as usize;
        let height = read_u32(&mut rest, "height", offset + 4)? as usize;
        if width == 0 || height == 0 {
            return Err(PixError::decode(format!(
                "mask {} at byte {offset} is {width}x{height}",
                masks.len()
            )));
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= rest.len())
            .ok_or_else(|| {
                PixError::decode(format!(
                    "mask {} at byte {offset} wants {width}x{height} bytes, {} left",
                    masks.len(),
                    rest.len()
                ))
            })?;
        let (payload, tail) = rest.split_at(len);
        masks.push(Image::from_vec(width, height, payload.to_vec())?);
        rest = tail;
    }
    tracing::debug!(count = masks.len(), bytes = bytes.len(), "parsed mask blob");
    Ok(masks)
}

/// Serializes masks into the layout [`parse_mask_blob`] reads.
pub fn write_mask_blob<S>(masks: &[S]) -> PixResult<Vec<u8>>
where
    S: Matrix<Elem = Gray8>,
{
    let mut out = Vec::new();
    for (i, mask) in masks.iter().enumerate() {
        let dims = (u32::try_from(mask.width()), u32::try_from(mask.height()));
        let (Ok(width), Ok(height)) = dims else {
            return Err(PixError::validation(format!(
                "mask {i} is {}x{}, larger than a blob record allows",
                mask.width(),
                mask.height()
            )));
        };
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        for y in 0..mask.height() {
            out.extend_from_slice(mask.row(y));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/blob.rs"]
mod tests;
