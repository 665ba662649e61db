use super::*;
use crate::{Rect, matrix::Image};

#[test]
fn transform_visits_each_pair_once_in_order() {
    let src = Image::from_fn(3, 2, |x, y| (y * 3 + x) as u8).unwrap();
    let mut dst = Image::new(3, 2, 0u32).unwrap();
    let mut order = Vec::new();
    transform(&src, &mut dst, |s| {
        order.push(s);
        u32::from(s) * 2
    })
    .unwrap();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(dst.as_slice(), &[0, 2, 4, 6, 8, 10]);
}

#[test]
fn transform_with_dst_sees_current_destination() {
    let mask = Image::from_vec(2, 2, vec![0u8, 1, 1, 0]).unwrap();
    let bg = PixelRgba8::opaque(50, 50, 50);
    let mut dst = Image::new(2, 2, bg).unwrap();
    let green = PixelRgba8::opaque(0, 255, 0);
    transform_with_dst(&mask, &mut dst, |m, d| if m != 0 { green } else { d }).unwrap();
    assert_eq!(dst.as_slice(), &[bg, green, green, bg]);
}

#[test]
fn transform_into_window() {
    let src = Image::new(2, 2, 7u8).unwrap();
    let mut dst = Image::new(4, 4, 0u8).unwrap();
    {
        let mut win = dst.sub_view_mut(Rect::new(2, 4, 2, 4).unwrap()).unwrap();
        transform(&src, &mut win, |v| v + 1).unwrap();
    }
    assert_eq!(dst.as_slice().iter().filter(|&&v| v == 8).count(), 4);
    assert_eq!(dst.get(3, 3), Some(8));
    assert_eq!(dst.get(1, 3), Some(0));
}

#[test]
fn transform_rejects_mismatched_shapes() {
    let src = Image::new(2, 3, 0u8).unwrap();
    let mut dst = Image::new(3, 2, 0u8).unwrap();
    assert!(matches!(
        transform(&src, &mut dst, |v| v),
        Err(PixError::DimensionMismatch(_))
    ));
}

#[test]
fn scale_up_runs_once_per_source_element() {
    let src = Image::from_vec(2, 1, vec![1u8, 2]).unwrap();
    let mut dst = Image::new(6, 3, PixelRgba8::TRANSPARENT).unwrap();
    let mut calls = 0;
    transform_scale_up(&src, &mut dst, 3, |v| {
        calls += 1;
        PixelRgba8::opaque(v, 0, 0)
    })
    .unwrap();
    assert_eq!(calls, 2);
    for y in 0..3 {
        for x in 0..6 {
            let want = if x < 3 { 1 } else { 2 };
            assert_eq!(dst.get(x, y), Some(PixelRgba8::opaque(want, 0, 0)));
        }
    }
}

#[test]
fn scale_up_blend_composites_blocks() {
    let src = Image::from_vec(2, 1, vec![0u8, 1]).unwrap();
    let mut dst = Image::new(4, 2, PixelRgba8::BLACK).unwrap();
    transform_scale_up_blend(&src, &mut dst, 2, |v| {
        PixelRgba8::new(255, 255, 255, if v == 0 { 0 } else { 128 })
    })
    .unwrap();
    assert_eq!(dst.get(0, 1), Some(PixelRgba8::BLACK));
    assert_eq!(dst.get(3, 1), Some(PixelRgba8::opaque(128, 128, 128)));
}

#[test]
fn scale_up_checks_scale_and_shape() {
    let src = Image::new(2, 2, 0u8).unwrap();
    let mut dst = Image::new(4, 4, 0u8).unwrap();
    assert!(matches!(
        transform_scale_up(&src, &mut dst, 0, |v| v),
        Err(PixError::Validation(_))
    ));
    assert!(matches!(
        transform_scale_up(&src, &mut dst, 3, |v| v),
        Err(PixError::DimensionMismatch(_))
    ));
    transform_scale_up(&src, &mut dst, 2, |v| v).unwrap();
}
