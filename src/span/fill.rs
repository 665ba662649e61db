use std::mem::size_of;

use crate::span::{portable, tier::SpanTier};

/// Sets every element of `dst` to `value`.
pub fn fill<T: Copy>(dst: &mut [T], value: T) {
    if cfg!(feature = "portable-span") {
        portable::fill(dst, value);
        return;
    }
    let Some(tier) = SpanTier::for_len(size_of_val(dst)) else {
        portable::fill(dst, value);
        return;
    };
    match (size_of::<T>(), tier) {
        (1, SpanTier::B64) => fill_blocks::<T, 8>(dst, value),
        (1, SpanTier::B128) => fill_blocks::<T, 16>(dst, value),
        (1, SpanTier::B256) => fill_blocks::<T, 32>(dst, value),
        (1, SpanTier::B512) => fill_blocks::<T, 64>(dst, value),
        (1, SpanTier::B1024) => fill_blocks::<T, 128>(dst, value),
        (4, SpanTier::B64) => fill_blocks::<T, 2>(dst, value),
        (4, SpanTier::B128) => fill_blocks::<T, 4>(dst, value),
        (4, SpanTier::B256) => fill_blocks::<T, 8>(dst, value),
        (4, SpanTier::B512) => fill_blocks::<T, 16>(dst, value),
        (4, SpanTier::B1024) => fill_blocks::<T, 32>(dst, value),
        _ => portable::fill(dst, value),
    }
}

/// Byte fill.
pub fn fill_u8(dst: &mut [u8], value: u8) {
    fill(dst, value);
}

/// 32-bit word fill.
pub fn fill_u32(dst: &mut [u32], value: u32) {
    fill(dst, value);
}

/// Broadcasts `value` into two spans, building the block pattern once.
///
/// Spans of different lengths are filled independently.
pub fn fill_dual<T: Copy>(a: &mut [T], b: &mut [T], value: T) {
    if a.len() != b.len() || cfg!(feature = "portable-span") {
        fill(a, value);
        fill(b, value);
        return;
    }
    let Some(tier) = SpanTier::for_len(size_of_val(a)) else {
        portable::fill(a, value);
        portable::fill(b, value);
        return;
    };
    match (size_of::<T>(), tier) {
        (1, SpanTier::B64) => fill_dual_blocks::<T, 8>(a, b, value),
        (1, SpanTier::B128) => fill_dual_blocks::<T, 16>(a, b, value),
        (1, SpanTier::B256) => fill_dual_blocks::<T, 32>(a, b, value),
        (1, SpanTier::B512) => fill_dual_blocks::<T, 64>(a, b, value),
        (1, SpanTier::B1024) => fill_dual_blocks::<T, 128>(a, b, value),
        (4, SpanTier::B64) => fill_dual_blocks::<T, 2>(a, b, value),
        (4, SpanTier::B128) => fill_dual_blocks::<T, 4>(a, b, value),
        (4, SpanTier::B256) => fill_dual_blocks::<T, 8>(a, b, value),
        (4, SpanTier::B512) => fill_dual_blocks::<T, 16>(a, b, value),
        (4, SpanTier::B1024) => fill_dual_blocks::<T, 32>(a, b, value),
        _ => {
            portable::fill(a, value);
            portable::fill(b, value);
        }
    }
}

// Requires dst.len() >= N.
fn fill_blocks<T: Copy, const N: usize>(dst: &mut [T], value: T) {
    let block = [value; N];
    store_blocks(dst, &block);
}

fn fill_dual_blocks<T: Copy, const N: usize>(a: &mut [T], b: &mut [T], value: T) {
    let block = [value; N];
    store_blocks(a, &block);
    store_blocks(b, &block);
}

fn store_blocks<T: Copy, const N: usize>(dst: &mut [T], block: &[T; N]) {
    let len = dst.len();
    debug_assert!(len >= N);

    let (blocks, _) = dst.as_chunks_mut::<N>();
    for d in blocks {
        *d = *block;
    }
    if len % N != 0 {
        if let Some(d) = dst[len - N..].first_chunk_mut::<N>() {
            *d = *block;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/span/fill.rs"]
mod tests;
