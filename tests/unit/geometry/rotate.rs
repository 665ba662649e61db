use super::*;
use crate::{PixError, matrix::Image};

fn numbered(w: usize, h: usize) -> Image<u32> {
    Image::from_fn(w, h, |x, y| (y * w + x) as u32).unwrap()
}

fn turned90(src: &Image<u32>) -> Image<u32> {
    let mut dst = Image::new(src.height(), src.width(), 0).unwrap();
    rotate90(src, &mut dst).unwrap();
    dst
}

#[test]
fn rotate90_is_clockwise() {
    // 0 1 2        3 0
    // 3 4 5   ->   4 1
    //              5 2
    let src = numbered(3, 2);
    let dst = turned90(&src);
    assert_eq!(dst.dims(), (2, 3));
    assert_eq!(dst.as_slice(), &[3, 0, 4, 1, 5, 2]);
}

#[test]
fn rotate270_undoes_rotate90() {
    let src = numbered(5, 3);
    let once = turned90(&src);
    let mut back = Image::new(5, 3, 0).unwrap();
    rotate270(&once, &mut back).unwrap();
    assert_eq!(back, src);
}

#[test]
fn four_quarter_turns_are_identity() {
    let src = numbered(4, 7);
    let out = turned90(&turned90(&turned90(&turned90(&src))));
    assert_eq!(out, src);
}

#[test]
fn two_half_turns_are_identity() {
    let src = numbered(6, 3);
    let mut a = Image::new(6, 3, 0).unwrap();
    let mut b = Image::new(6, 3, 0).unwrap();
    rotate180(&src, &mut a).unwrap();
    assert_eq!(a.get(0, 0), Some(17));
    rotate180(&a, &mut b).unwrap();
    assert_eq!(b, src);
}

#[test]
fn quarter_turn_rejects_unswapped_destination() {
    let src = numbered(3, 2);
    let mut dst = Image::new(3, 2, 0).unwrap();
    let err = rotate90(&src, &mut dst).unwrap_err();
    assert!(matches!(err, PixError::DimensionMismatch(_)));
}

#[test]
fn arbitrary_rotation_by_zero_copies() {
    let src = numbered(5, 4);
    let mut dst = Image::new(5, 4, u32::MAX).unwrap();
    rotate(&src, &mut dst, Turn::ZERO, Point2::new(2.0, 1.0), Point2::new(2.0, 1.0));
    assert_eq!(dst, src);
}

#[test]
fn arbitrary_quarter_turn_about_center_matches_rotate90() {
    let src = numbered(7, 7);
    let center = Point2::new(3.0, 3.0);
    let mut dst = Image::new(7, 7, u32::MAX).unwrap();
    rotate(&src, &mut dst, Turn::QUARTER, center, center);
    assert_eq!(dst, turned90(&src));
}

#[test]
fn pivots_translate_the_result() {
    let src = numbered(3, 3);
    let mut dst = Image::new(6, 6, u32::MAX).unwrap();
    rotate(&src, &mut dst, Turn::ZERO, Point2::new(0.0, 0.0), Point2::new(2.0, 3.0));
    assert_eq!(dst.get(2, 3), Some(0));
    assert_eq!(dst.get(4, 5), Some(8));
    assert_eq!(dst.get(1, 3), Some(u32::MAX));
    assert_eq!(dst.get(5, 5), Some(u32::MAX));
}

#[test]
fn pixels_mapping_outside_source_are_untouched() {
    let src = Image::new(9, 9, 1u8).unwrap();
    let mut dst = Image::new(9, 9, 0u8).unwrap();
    let center = Point2::new(4.0, 4.0);
    rotate(&src, &mut dst, Turn::from_degrees(45.0), center, center);
    assert_eq!(dst.get(4, 4), Some(1));
    assert_eq!(dst.get(4, 0), Some(1));
    for (x, y) in [(0, 0), (8, 0), (0, 8), (8, 8)] {
        assert_eq!(dst.get(x, y), Some(0), "corner ({x},{y})");
    }
}

#[test]
fn rotate_blend_composites_samples() {
    let src = Image::new(3, 3, PixelRgba8::new(200, 0, 0, 0)).unwrap();
    let bg = PixelRgba8::opaque(10, 20, 30);
    let mut dst = Image::new(3, 3, bg).unwrap();
    let c = Point2::new(1.0, 1.0);
    rotate_blend(&src, &mut dst, Turn::HALF, c, c);
    assert!(dst.as_slice().iter().all(|&p| p == bg));

    let src = Image::new(3, 3, PixelRgba8::new(200, 0, 0, 255)).unwrap();
    rotate_blend(&src, &mut dst, Turn::HALF, c, c);
    assert!(dst.as_slice().iter().all(|&p| p == PixelRgba8::opaque(200, 0, 0)));
}
