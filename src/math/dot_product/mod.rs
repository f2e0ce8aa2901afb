//! # Dot Product
//!
//! The dot product (inner product) computes the sum of products of
//! corresponding elements in two sequences:
//!
//! `dot(x, y) = Σ(x[i] * y[i])`
//!
//! ## Variants
//!
//! - **original**: one accumulator, strictly serial additions
//! - **unroll-F**: `F` independent lane accumulators plus loop peeling
//! - **simd**: hardware vector lanes (SSE2, AVX2 or NEON, picked at startup)
//! - **c-vectorized**: the plain loop compiled by a vectorizing C compiler
//!
//! Every variant except `original` reorders the additions, so results are
//! compared under a relative tolerance.

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::element::{Element, Floating};
use crate::error::{check_lengths, Result};
use crate::registry::AlgorithmRunner;
use crate::utils::bench::{generate_sequence, seeded_rng};
use crate::utils::buffer::InputBuffer;
use crate::utils::timer::Variant;
use crate::utils::verify::{Tolerance, VerifyReport};

/// Length of the sequences used by [`DotProductRunner::verify`].
pub const VERIFY_LENGTH: usize = 99_999;

/// Check every variant in this build against `original` on `x` and `y`.
pub fn verify_on(x: &[Floating], y: &[Floating]) -> Result<VerifyReport> {
    check_lengths(x, y)?;

    let mut report = VerifyReport::new("dot_product", Tolerance::Relative(Floating::DOT_TOLERANCE));
    let expected = dot_product_original(x, y).to_f64();

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }
        let actual = (variant.function)(x, y).to_f64();
        report.record(variant.name, expected, actual);
    }

    Ok(report)
}

/// Runner for the dot product reduction
pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of pairwise products of two equal-length sequences"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, input: &'a InputBuffer, bytes: usize) -> Vec<Variant<'a>> {
        let (x, y) = input.pair(bytes);
        bench::variant_closures(x, y)
    }

    fn verify(&self, seed: u64) -> Result<VerifyReport> {
        let mut rng = seeded_rng(seed);
        let x: Vec<Floating> = generate_sequence(VERIFY_LENGTH, &mut rng);
        let y: Vec<Floating> = generate_sequence(VERIFY_LENGTH, &mut rng);
        verify_on(&x, &y)
    }
}
