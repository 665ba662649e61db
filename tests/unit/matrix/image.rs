use super::*;

#[test]
fn new_fills_and_rejects_empty_shapes() {
    let img = Image::new(3, 2, 7u8).unwrap();
    assert_eq!(img.dims(), (3, 2));
    assert!(img.as_slice().iter().all(|&v| v == 7));
    assert!(matches!(
        Image::new(0, 2, 0u8),
        Err(PixError::InvalidRegion(_))
    ));
}

#[test]
fn from_vec_checks_length() {
    assert!(Image::from_vec(2, 2, vec![0u8; 4]).is_ok());
    assert!(matches!(
        Image::from_vec(2, 2, vec![0u8; 5]),
        Err(PixError::DimensionMismatch(_))
    ));
}

#[test]
fn from_fn_visits_row_major() {
    let img = Image::from_fn(3, 2, |x, y| (y * 10 + x) as u8).unwrap();
    assert_eq!(img.as_slice(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(img.get(2, 1), Some(12));
    assert_eq!(img.get(3, 0), None);
}

#[test]
fn views_alias_image_storage() {
    let mut img = Image::new(4, 4, 0u8).unwrap();
    {
        let mut sub = img.sub_view_mut(Rect::new(2, 4, 0, 2).unwrap()).unwrap();
        *sub.pixel_mut(1, 1) = 9;
    }
    assert_eq!(img.get(3, 1), Some(9));
    assert_eq!(*img.view().pixel(3, 1), 9);
    assert_eq!(img.sub_view(Rect::new(3, 4, 1, 2).unwrap()).unwrap().row(0), &[9]);
    assert!(img.sub_view(Rect::new(3, 5, 1, 2).unwrap()).is_err());
}
