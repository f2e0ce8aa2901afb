//! Minimum implementations.

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
pub use c_impl::{minimum_c, ExternalMin};
pub use original::minimum_original;
#[cfg(feature = "simd")]
pub use simd::{minimum_simd, VectorMin};
pub use unrolled::minimum_unrolled;

use crate::element::Floating;
use crate::utils::VariantInfo;

pub type MinimumFn = fn(&[Floating]) -> Floating;

/// Variants compiled into this build, reference first.
pub fn available_variants() -> Vec<VariantInfo<MinimumFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<MinimumFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Scalar reference loop with a single running minimum",
            function: minimum_original::<Floating>,
        },
        VariantInfo {
            name: "unroll-2",
            description: "Manual unrolling, 2 lanes",
            function: minimum_unrolled::<Floating, 2>,
        },
        VariantInfo {
            name: "unroll-4",
            description: "Manual unrolling, 4 lanes",
            function: minimum_unrolled::<Floating, 4>,
        },
        VariantInfo {
            name: "unroll-8",
            description: "Manual unrolling, 8 lanes",
            function: minimum_unrolled::<Floating, 8>,
        },
        VariantInfo {
            name: "unroll-16",
            description: "Manual unrolling, 16 lanes",
            function: minimum_unrolled::<Floating, 16>,
        },
    ];

    #[cfg(feature = "simd")]
    variants.push(VariantInfo {
        name: "simd",
        description: "Hardware vector min, backend detected at startup",
        function: minimum_simd::<Floating>,
    });

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-vectorized",
        description: "C loop auto-vectorized by the C compiler",
        function: minimum_c::<Floating>,
    });

    variants
}
