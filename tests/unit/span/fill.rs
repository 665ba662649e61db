use super::*;
use crate::PixelRgba8;

#[test]
fn byte_fill_matches_portable_for_every_length() {
    for len in 0..300 {
        let mut fast = vec![1u8; len];
        let mut slow = vec![1u8; len];
        fill_u8(&mut fast, 0x5C);
        portable::fill(&mut slow, 0x5C);
        assert_eq!(fast, slow, "len {len}");
        assert!(fast.iter().all(|&b| b == 0x5C));
    }
}

#[test]
fn word_fill_covers_tail_blocks() {
    for len in 0..70 {
        let mut words = vec![0u32; len];
        fill_u32(&mut words, 0xDEAD_BEEF);
        assert!(words.iter().all(|&w| w == 0xDEAD_BEEF), "len {len}");
    }
}

#[test]
fn pixel_fill_only_touches_the_slice() {
    let mut buf = vec![PixelRgba8::BLACK; 50];
    let red = PixelRgba8::opaque(255, 0, 0);
    fill(&mut buf[5..45], red);
    assert!(buf[..5].iter().all(|p| *p == PixelRgba8::BLACK));
    assert!(buf[5..45].iter().all(|p| *p == red));
    assert!(buf[45..].iter().all(|p| *p == PixelRgba8::BLACK));
}

#[test]
fn dual_fill_writes_both_destinations() {
    for len in [0usize, 3, 8, 17, 64, 129] {
        let mut a = vec![0u8; len];
        let mut b = vec![9u8; len];
        fill_dual(&mut a, &mut b, 42);
        assert!(a.iter().chain(&b).all(|&v| v == 42), "len {len}");
    }

    let mut a = vec![0u32; 5];
    let mut b = vec![0u32; 11];
    fill_dual(&mut a, &mut b, 3);
    assert!(a.iter().chain(&b).all(|&v| v == 3));
}
