use std::mem::size_of;

use crate::span::{portable, tier::SpanTier};

/// Copies all of `src` into the front of `dst`.
///
/// `dst` must be at least as long as `src`.
pub fn copy<T: Copy>(src: &[T], dst: &mut [T]) {
    debug_assert!(
        dst.len() >= src.len(),
        "copy destination holds {} elements, source {}",
        dst.len(),
        src.len()
    );
    let dst = &mut dst[..src.len()];
    if cfg!(feature = "portable-span") {
        portable::copy(src, dst);
        return;
    }
    let Some(tier) = SpanTier::for_len(size_of_val(src)) else {
        portable::copy(src, dst);
        return;
    };
    match (size_of::<T>(), tier) {
        (1, SpanTier::B64) => copy_blocks::<T, 8>(src, dst),
        (1, SpanTier::B128) => copy_blocks::<T, 16>(src, dst),
        (1, SpanTier::B256) => copy_blocks::<T, 32>(src, dst),
        (1, SpanTier::B512) => copy_blocks::<T, 64>(src, dst),
        (1, SpanTier::B1024) => copy_blocks::<T, 128>(src, dst),
        (4, SpanTier::B64) => copy_blocks::<T, 2>(src, dst),
        (4, SpanTier::B128) => copy_blocks::<T, 4>(src, dst),
        (4, SpanTier::B256) => copy_blocks::<T, 8>(src, dst),
        (4, SpanTier::B512) => copy_blocks::<T, 16>(src, dst),
        (4, SpanTier::B1024) => copy_blocks::<T, 32>(src, dst),
        _ => portable::copy(src, dst),
    }
}

// Requires src.len() == dst.len() >= N.
fn copy_blocks<T: Copy, const N: usize>(src: &[T], dst: &mut [T]) {
    let len = src.len();
    debug_assert!(len >= N && dst.len() == len);

    let (src_blocks, _) = src.as_chunks::<N>();
    let (dst_blocks, _) = dst.as_chunks_mut::<N>();
    for (d, s) in dst_blocks.iter_mut().zip(src_blocks) {
        *d = *s;
    }

    if len % N != 0 {
        // Last block overlaps the previous one.
        if let (Some(d), Some(s)) = (
            dst[len - N..].first_chunk_mut::<N>(),
            src[len - N..].first_chunk::<N>(),
        ) {
            *d = *s;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/span/copy.rs"]
mod tests;
