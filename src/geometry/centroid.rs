use crate::{
    foundation::core::{PixelRgba8, Point2},
    matrix::Matrix,
};

/// Mean position of every pixel with nonzero alpha.
///
/// A fully transparent matrix yields its geometric centre instead.
pub fn centroid<S: Matrix<Elem = PixelRgba8> + ?Sized>(src: &S) -> Point2 {
    let (mut sum_x, mut sum_y, mut count) = (0f64, 0f64, 0u64);
    for y in 0..src.height() {
        for (x, px) in src.row(y).iter().enumerate() {
            if px.a != 0 {
                sum_x += x as f64;
                sum_y += y as f64;
                count += 1;
            }
        }
    }
    if count == 0 {
        return Point2::new(src.width() as f32 / 2.0, src.height() as f32 / 2.0);
    }
    let n = count as f64;
    Point2::new((sum_x / n) as f32, (sum_y / n) as f32)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/centroid.rs"]
mod tests;
