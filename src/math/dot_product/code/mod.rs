//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product algorithm.

#[cfg(c_implementation_active)]
pub mod c_impl;
mod original;
#[cfg(feature = "simd")]
pub mod simd;
mod unrolled;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod aarch64;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod x86_64;

#[cfg(c_implementation_active)]
pub use c_impl::{dot_product_c, ExternalDot};
pub use original::dot_product_original;
#[cfg(feature = "simd")]
pub use simd::{dot_product_simd, VectorDot};
pub use unrolled::dot_product_unrolled;

use crate::element::Floating;
use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[Floating], &[Floating]) -> Floating;

/// Get all variants compiled into this build.
///
/// The reference implementation is always first.
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Scalar reference loop with a single accumulator",
            function: dot_product_original::<Floating>,
        },
        VariantInfo {
            name: "unroll-2",
            description: "Manual unrolling, 2 lanes",
            function: dot_product_unrolled::<Floating, 2>,
        },
        VariantInfo {
            name: "unroll-4",
            description: "Manual unrolling, 4 lanes",
            function: dot_product_unrolled::<Floating, 4>,
        },
        VariantInfo {
            name: "unroll-8",
            description: "Manual unrolling, 8 lanes",
            function: dot_product_unrolled::<Floating, 8>,
        },
        VariantInfo {
            name: "unroll-16",
            description: "Manual unrolling, 16 lanes",
            function: dot_product_unrolled::<Floating, 16>,
        },
    ];

    #[cfg(feature = "simd")]
    variants.push(VariantInfo {
        name: "simd",
        description: "Hardware vector lanes, backend detected at startup",
        function: dot_product_simd::<Floating>,
    });

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-vectorized",
        description: "C loop auto-vectorized by the C compiler",
        function: dot_product_c::<Floating>,
    });

    variants
}
