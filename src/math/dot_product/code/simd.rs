//! Dot product on the vector backend chosen at startup.

use super::dot_product_unrolled;
use crate::element::Element;
use crate::utils::simd::{backend, VectorBackend};

/// Element types with a hardware vector dot product.
pub trait VectorDot: Element {
    fn dot_vector(x: &[Self], y: &[Self]) -> Self;
}

impl VectorDot for f32 {
    fn dot_vector(x: &[f32], y: &[f32]) -> f32 {
        match backend() {
            // SAFETY: `backend` only reports instruction sets the CPU supports
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Avx2 => unsafe { super::x86_64::dot_f32_avx2(x, y) },
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Sse2 => unsafe { super::x86_64::dot_f32_sse2(x, y) },
            #[cfg(target_arch = "aarch64")]
            VectorBackend::Neon => unsafe { super::aarch64::dot_f32_neon(x, y) },
            _ => dot_product_unrolled::<f32, 8>(x, y),
        }
    }
}

impl VectorDot for f64 {
    fn dot_vector(x: &[f64], y: &[f64]) -> f64 {
        match backend() {
            // SAFETY: `backend` only reports instruction sets the CPU supports
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Avx2 => unsafe { super::x86_64::dot_f64_avx2(x, y) },
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Sse2 => unsafe { super::x86_64::dot_f64_sse2(x, y) },
            #[cfg(target_arch = "aarch64")]
            VectorBackend::Neon => unsafe { super::aarch64::dot_f64_neon(x, y) },
            _ => dot_product_unrolled::<f64, 8>(x, y),
        }
    }
}

/// Compute the dot product with hardware vector instructions.
///
/// # Panics
/// Panics if the sequences have different lengths.
pub fn dot_product_simd<T: VectorDot>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "Sequences must have the same length");
    T::dot_vector(x, y)
}
