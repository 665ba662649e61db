use super::*;
use crate::matrix::Image;

#[test]
fn classify_buckets() {
    assert_eq!(classify_rgba(PixelRgba8::new(255, 0, 0, 0)), 0);
    assert_eq!(classify_rgba(PixelRgba8::BLACK), 1);
    assert_eq!(classify_rgba(PixelRgba8::new(0, 0, 0, 12)), 1);
    assert_eq!(classify_rgba(PixelRgba8::opaque(0, 1, 0)), 2);
    assert_eq!(MaskClass::from_code(2), Some(MaskClass::Soft));
    assert_eq!(MaskClass::from_code(3), None);
}

#[test]
fn encode_mask_maps_every_pixel() {
    let art = Image::from_vec(
        3,
        1,
        vec![
            PixelRgba8::TRANSPARENT,
            PixelRgba8::BLACK,
            PixelRgba8::opaque(9, 9, 9),
        ],
    )
    .unwrap();
    let mut mask = Image::new(3, 1, 99u8).unwrap();
    encode_mask(&art, &mut mask).unwrap();
    assert_eq!(mask.as_slice(), &[0, 1, 2]);
}

#[test]
fn stencil_of_all_ones_is_solid_color() {
    let mask = Image::new(4, 4, 1u8).unwrap();
    let gray = PixelRgba8::opaque(128, 128, 128);
    let green = PixelRgba8::opaque(0, 255, 0);
    let mut dst = Image::new(4, 4, gray).unwrap();
    stencil(&mask, &mut dst, green).unwrap();
    assert!(dst.as_slice().iter().all(|p| *p == green));
}

#[test]
fn stencil_of_all_zeros_keeps_background() {
    let mask = Image::new(4, 4, 0u8).unwrap();
    let gray = PixelRgba8::opaque(128, 128, 128);
    let mut dst = Image::new(4, 4, gray).unwrap();
    stencil(&mask, &mut dst, PixelRgba8::opaque(0, 255, 0)).unwrap();
    assert!(dst.as_slice().iter().all(|p| *p == gray));
}

#[test]
fn paint_mask_per_class() {
    let mask = Image::from_vec(4, 1, vec![0u8, 1, 2, 7]).unwrap();
    let bg = PixelRgba8::opaque(100, 100, 100);
    let mut dst = Image::new(4, 1, bg).unwrap();
    paint_mask(
        &mask,
        &mut dst,
        PixelRgba8::opaque(255, 0, 0),
        PixelRgba8::new(0, 0, 200, 128),
    )
    .unwrap();
    assert_eq!(
        dst.as_slice(),
        &[
            bg,
            PixelRgba8::opaque(255, 0, 0),
            PixelRgba8::opaque(50, 50, 150),
            bg
        ]
    );
}

#[test]
fn blit_packs_argb_words() {
    let src = Image::new(2, 1, PixelRgba8::new(1, 2, 3, 255)).unwrap();
    let mut surface = vec![0u32; 2];
    let mut view = crate::matrix::ViewMut::new(2, 1, &mut surface).unwrap();
    blit_argb8888(&src, &mut view).unwrap();
    assert_eq!(surface, vec![0xFF01_0203, 0xFF01_0203]);
}
