//! Minimum on the vector backend chosen at startup.

use super::minimum_unrolled;
use crate::element::Element;
use crate::utils::simd::{backend, VectorBackend};

/// Element types with a hardware vector minimum.
pub trait VectorMin: Element {
    fn min_vector(x: &[Self]) -> Self;
}

impl VectorMin for f32 {
    fn min_vector(x: &[f32]) -> f32 {
        match backend() {
            // SAFETY: `backend` only reports instruction sets the CPU supports
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Avx2 => unsafe { super::x86_64::min_f32_avx2(x) },
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Sse2 => unsafe { super::x86_64::min_f32_sse2(x) },
            #[cfg(target_arch = "aarch64")]
            VectorBackend::Neon => unsafe { super::aarch64::min_f32_neon(x) },
            _ => minimum_unrolled::<f32, 8>(x),
        }
    }
}

impl VectorMin for f64 {
    fn min_vector(x: &[f64]) -> f64 {
        match backend() {
            // SAFETY: `backend` only reports instruction sets the CPU supports
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Avx2 => unsafe { super::x86_64::min_f64_avx2(x) },
            #[cfg(target_arch = "x86_64")]
            VectorBackend::Sse2 => unsafe { super::x86_64::min_f64_sse2(x) },
            #[cfg(target_arch = "aarch64")]
            VectorBackend::Neon => unsafe { super::aarch64::min_f64_neon(x) },
            _ => minimum_unrolled::<f64, 8>(x),
        }
    }
}

/// Smallest value of `x` using hardware vector instructions.
pub fn minimum_simd<T: VectorMin>(x: &[T]) -> T {
    T::min_vector(x)
}
