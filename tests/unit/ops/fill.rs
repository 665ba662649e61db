use super::*;
use crate::{
    Rect,
    matrix::{Image, Matrix},
};

#[test]
fn fill_covers_full_view() {
    let mut img = Image::new(5, 3, PixelRgba8::BLACK).unwrap();
    let c = PixelRgba8::new(1, 2, 3, 4);
    fill(&mut img.view_mut(), c);
    assert!(img.as_slice().iter().all(|p| *p == c));
}

#[test]
fn fill_sub_view_leaves_outside_untouched() {
    let mut img = Image::new(6, 5, 0u8).unwrap();
    {
        let mut sub = img.sub_view_mut(Rect::new(1, 4, 2, 5).unwrap()).unwrap();
        fill(&mut sub, 9);
    }
    for y in 0..5 {
        for x in 0..6 {
            let inside = (1..4).contains(&x) && (2..5).contains(&y);
            assert_eq!(img.get(x, y), Some(if inside { 9 } else { 0 }), "({x},{y})");
        }
    }
}

#[test]
fn fill_blend_composites_rgb_only() {
    let mut img = Image::new(2, 2, PixelRgba8::new(0, 0, 0, 17)).unwrap();
    fill_blend(&mut img, PixelRgba8::new(255, 255, 255, 128));
    assert!(img.as_slice().iter().all(|p| *p == PixelRgba8::new(128, 128, 128, 17)));

    fill_blend(&mut img, PixelRgba8::new(9, 9, 9, 0));
    assert!(img.as_slice().iter().all(|p| *p == PixelRgba8::new(128, 128, 128, 17)));

    fill_blend(&mut img, PixelRgba8::new(1, 2, 3, 255));
    assert!(img.as_slice().iter().all(|p| *p == PixelRgba8::new(1, 2, 3, 17)));
}

#[test]
fn fill_if_only_rewrites_matches() {
    let mut mask = Image::from_vec(4, 1, vec![0u8, 1, 2, 1]).unwrap();
    fill_if(&mut mask, 255, |v| v == 1);
    assert_eq!(mask.row(0), &[0, 255, 2, 255]);
}
