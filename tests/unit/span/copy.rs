use super::*;
use crate::PixelRgba8;

fn pattern_u8(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

#[test]
fn byte_copy_matches_portable_for_every_length() {
    for len in 0..300 {
        let src = pattern_u8(len);
        let mut fast = vec![0xAAu8; len + 5];
        let mut slow = vec![0xAAu8; len + 5];
        copy(&src, &mut fast);
        portable::copy(&src, &mut slow);
        assert_eq!(fast, slow, "len {len}");
        assert_eq!(&fast[..len], &src[..]);
        assert!(fast[len..].iter().all(|&b| b == 0xAA), "len {len} overran");
    }
}

#[test]
fn word_copy_matches_portable_for_every_length() {
    for len in 0..80 {
        let src: Vec<u32> = (0..len as u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
        let mut fast = vec![7u32; len + 3];
        let mut slow = vec![7u32; len + 3];
        copy(&src, &mut fast);
        portable::copy(&src, &mut slow);
        assert_eq!(fast, slow, "len {len}");
    }
}

#[test]
fn pixel_copy_goes_through_word_tiers() {
    let src: Vec<PixelRgba8> = (0..37u8).map(|i| PixelRgba8::new(i, 2 * i, 3 * i, 255)).collect();
    let mut dst = vec![PixelRgba8::TRANSPARENT; 37];
    copy(&src, &mut dst);
    assert_eq!(dst, src);
}

#[test]
fn odd_sized_elements_use_scalar_path() {
    let src: Vec<[u8; 3]> = (0..20u8).map(|i| [i, i + 1, i + 2]).collect();
    let mut dst = vec![[0u8; 3]; 20];
    copy(&src, &mut dst);
    assert_eq!(dst, src);
}
