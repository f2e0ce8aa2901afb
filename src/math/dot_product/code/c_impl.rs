//! FFI bindings for the externally vectorized C dot product.
//!
//! Only compiled when the build script managed to build the C sources.

use crate::element::Element;

mod ffi {
    use libc::size_t;
    use std::os::raw::{c_double, c_float};

    extern "C" {
        pub fn reduce_dot_f32(x: *const c_float, y: *const c_float, n: size_t) -> c_float;
        pub fn reduce_dot_f64(x: *const c_double, y: *const c_double, n: size_t) -> c_double;
    }
}

/// Element types with a C dot product symbol.
pub trait ExternalDot: Element {
    fn dot_external(x: &[Self], y: &[Self]) -> Self;
}

impl ExternalDot for f32 {
    fn dot_external(x: &[f32], y: &[f32]) -> f32 {
        // SAFETY: both pointers are valid for `x.len()` reads
        unsafe { ffi::reduce_dot_f32(x.as_ptr(), y.as_ptr(), x.len()) }
    }
}

impl ExternalDot for f64 {
    fn dot_external(x: &[f64], y: &[f64]) -> f64 {
        // SAFETY: both pointers are valid for `x.len()` reads
        unsafe { ffi::reduce_dot_f64(x.as_ptr(), y.as_ptr(), x.len()) }
    }
}

/// C implementation wrapper
///
/// # Panics
/// Panics if the sequences have different lengths.
pub fn dot_product_c<T: ExternalDot>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "Sequences must have the same length");
    T::dot_external(x, y)
}
