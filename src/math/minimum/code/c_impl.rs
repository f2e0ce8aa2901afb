//! FFI bindings for the externally vectorized C minimum.

use crate::element::Element;

mod ffi {
    use libc::size_t;
    use std::os::raw::{c_double, c_float};

    extern "C" {
        pub fn reduce_min_f32(x: *const c_float, n: size_t) -> c_float;
        pub fn reduce_min_f64(x: *const c_double, n: size_t) -> c_double;
    }
}

/// Element types with a C minimum symbol.
pub trait ExternalMin: Element {
    fn min_external(x: &[Self]) -> Self;
}

impl ExternalMin for f32 {
    fn min_external(x: &[f32]) -> f32 {
        // SAFETY: the pointer is valid for `x.len()` reads
        unsafe { ffi::reduce_min_f32(x.as_ptr(), x.len()) }
    }
}

impl ExternalMin for f64 {
    fn min_external(x: &[f64]) -> f64 {
        // SAFETY: the pointer is valid for `x.len()` reads
        unsafe { ffi::reduce_min_f64(x.as_ptr(), x.len()) }
    }
}

/// C implementation wrapper
pub fn minimum_c<T: ExternalMin>(x: &[T]) -> T {
    T::min_external(x)
}
