use super::*;
use crate::matrix::{Matrix, MatrixMut};

#[test]
fn with_len_zero_fills_and_views_prefix() {
    let mut buf = Buffer::<u32>::with_len("frame", 20).unwrap();
    assert_eq!(buf.len(), 20);
    assert_eq!(buf.tag(), "frame");
    {
        let mut v = buf.view_mut(4, 4).unwrap();
        *v.pixel_mut(3, 3) = 5;
    }
    assert_eq!(buf.as_slice()[15], 5);
    assert!(buf.as_slice()[16..].iter().all(|&w| w == 0));
    assert!(buf.view(5, 5).is_err());
}

#[test]
fn absurd_reservation_is_an_allocation_failure() {
    let err = Buffer::<u64>::with_len("huge", usize::MAX / 4).unwrap_err();
    assert!(matches!(err, PixError::AllocationFailure(_)));
    assert!(err.to_string().contains("huge"));
}

#[test]
fn grow_extends_and_never_shrinks() {
    let mut buf = Buffer::<u8>::with_len("grow", 4).unwrap();
    buf.as_mut_slice().fill(3);
    buf.grow(10).unwrap();
    assert_eq!(buf.len(), 10);
    assert_eq!(&buf.as_slice()[..4], &[3, 3, 3, 3]);
    assert!(buf.as_slice()[4..].iter().all(|&b| b == 0));
    buf.grow(2).unwrap();
    assert_eq!(buf.len(), 10);
}

#[test]
fn carve_mut_hands_out_disjoint_views() {
    let mut buf = Buffer::<u8>::with_len("arena", 16).unwrap();
    {
        let mut views = buf.carve_mut(&[(2, 2), (3, 2)]).unwrap();
        views[0].row_mut(1).fill(1);
        views[1].row_mut(0).fill(2);
        assert_eq!(views[1].dims(), (3, 2));
    }
    assert_eq!(&buf.as_slice()[..10], &[0, 0, 1, 1, 2, 2, 2, 0, 0, 0]);
    assert!(buf.carve_mut(&[(4, 4), (1, 1)]).is_err());
    assert!(buf.carve_mut(&[(0, 1)]).is_err());
    buf.release();
}
