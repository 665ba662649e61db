use super::*;
use crate::{
    PixError, Rect,
    matrix::{Image, View},
};

#[test]
fn copy_full_views() {
    let src = Image::from_fn(4, 3, |x, y| (x + 4 * y) as u8).unwrap();
    let mut dst = Image::new(4, 3, 0u8).unwrap();
    copy(&src.view(), &mut dst.view_mut()).unwrap();
    assert_eq!(src, dst);
}

#[test]
fn copy_between_windows_goes_row_by_row() {
    let src = Image::from_fn(6, 6, |x, y| PixelRgba8::new(x as u8, y as u8, 0, 255)).unwrap();
    let mut dst = Image::new(5, 5, PixelRgba8::TRANSPARENT).unwrap();
    let window = src.sub_view(Rect::new(2, 5, 1, 3).unwrap()).unwrap();
    {
        let mut target = dst.sub_view_mut(Rect::new(0, 3, 3, 5).unwrap()).unwrap();
        copy(&window, &mut target).unwrap();
    }
    assert_eq!(dst.get(0, 3), Some(PixelRgba8::new(2, 1, 0, 255)));
    assert_eq!(dst.get(2, 4), Some(PixelRgba8::new(4, 2, 0, 255)));
    assert_eq!(dst.get(3, 3), Some(PixelRgba8::TRANSPARENT));
    assert_eq!(dst.get(0, 2), Some(PixelRgba8::TRANSPARENT));
}

#[test]
fn copy_rejects_shape_mismatch() {
    let data = [0u8; 6];
    let src = View::new(3, 2, &data[..]).unwrap();
    let mut dst = Image::new(2, 3, 0u8).unwrap();
    assert!(matches!(
        copy(&src, &mut dst),
        Err(PixError::DimensionMismatch(_))
    ));
}

#[test]
fn copy_blend_variants() {
    let src = Image::from_vec(
        2,
        1,
        vec![PixelRgba8::new(200, 0, 0, 255), PixelRgba8::new(0, 200, 0, 0)],
    )
    .unwrap();
    let mut dst = Image::new(2, 1, PixelRgba8::opaque(10, 10, 10)).unwrap();
    copy_blend(&src, &mut dst).unwrap();
    assert_eq!(dst.get(0, 0), Some(PixelRgba8::opaque(200, 0, 0)));
    assert_eq!(dst.get(1, 0), Some(PixelRgba8::opaque(10, 10, 10)));

    let mut faded = Image::new(2, 1, PixelRgba8::BLACK).unwrap();
    copy_blend_alpha(&src, &mut faded, 128).unwrap();
    assert_eq!(faded.get(0, 0), Some(PixelRgba8::opaque(100, 0, 0)));
    assert_eq!(faded.get(1, 0), Some(PixelRgba8::opaque(0, 100, 0)));

    let mut wrong = Image::new(1, 1, PixelRgba8::BLACK).unwrap();
    assert!(copy_blend(&src, &mut wrong).is_err());
}
