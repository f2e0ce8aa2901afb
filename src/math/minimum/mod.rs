//! # Minimum
//!
//! Smallest element of a sequence, with the type's largest finite value as
//! the identity:
//!
//! `min(x) = min(MAX, x[0], x[1], ...)`
//!
//! The same variants as the dot product are provided. Taking a minimum does
//! not round, so every variant must match `original` exactly.

pub mod bench;
pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::element::{Element, Floating};
use crate::error::Result;
use crate::registry::AlgorithmRunner;
use crate::utils::bench::{generate_sequence, seeded_rng};
use crate::utils::buffer::InputBuffer;
use crate::utils::timer::Variant;
use crate::utils::verify::{Tolerance, VerifyReport};

/// Length of the sequence used by [`MinimumRunner::verify`].
pub const VERIFY_LENGTH: usize = 99_999;

/// Check every variant in this build against `original` on `x`.
pub fn verify_on(x: &[Floating]) -> VerifyReport {
    let mut report = VerifyReport::new("minimum", Tolerance::Exact);
    let expected = minimum_original(x).to_f64();

    for variant in available_variants() {
        if variant.name == "original" {
            continue;
        }
        let actual = (variant.function)(x).to_f64();
        report.record(variant.name, expected, actual);
    }

    report
}

pub struct MinimumRunner;

impl AlgorithmRunner for MinimumRunner {
    fn name(&self) -> &'static str {
        "minimum"
    }

    fn description(&self) -> &'static str {
        "Smallest element of a sequence"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, input: &'a InputBuffer, bytes: usize) -> Vec<Variant<'a>> {
        bench::variant_closures(input.sequence(bytes))
    }

    fn verify(&self, seed: u64) -> Result<VerifyReport> {
        let x: Vec<Floating> = generate_sequence(VERIFY_LENGTH, &mut seeded_rng(seed));
        Ok(verify_on(&x))
    }
}
