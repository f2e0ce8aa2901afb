//! Registry of reductions.
//!
//! Both binaries discover the reductions and their variants through this
//! module instead of naming them one by one.

use crate::error::Result;
use crate::utils::buffer::InputBuffer;
use crate::utils::timer::{Variant, VariantResult};
use crate::utils::verify::VerifyReport;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// Trait that all reductions must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the reduction (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured on the prefix of
    /// `input` that covers `bytes` bytes.
    /// Each closure runs ONE sample and returns (time per call, result).
    /// The timer handles warmup, scheduling, and repetition.
    fn get_variant_closures<'a>(&'a self, input: &'a InputBuffer, bytes: usize) -> Vec<Variant<'a>>;

    /// Check every variant against the reference on seeded random input.
    /// Fails only if the generated input is unusable (e.g. length mismatch);
    /// disagreements are recorded in the report.
    fn verify(&self, seed: u64) -> Result<VerifyReport>;
}

/// Global registry of all reductions
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find reduction by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all reductions
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::minimum::MinimumRunner);

    registry
}
