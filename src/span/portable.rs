//! Scalar reference loops for the span primitives.

/// Copies `src` into the front of `dst` one element at a time.
pub fn copy<T: Copy>(src: &[T], dst: &mut [T]) {
    debug_assert!(dst.len() >= src.len(), "copy destination too short");
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
}

/// Sets every element of `dst` to `value` one element at a time.
pub fn fill<T: Copy>(dst: &mut [T], value: T) {
    for d in dst {
        *d = value;
    }
}
