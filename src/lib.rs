//! # Micro-Reduce
//!
//! Inner product and minimum reductions over floating-point slices, each in
//! several variants: a scalar reference, manual unrolling with loop peeling,
//! hardware vector lanes and an externally vectorized C kernel.

pub mod element;
pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

pub use element::{Element, Floating};
pub use error::{Error, Result};

/// Terminal output shared by both binaries
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::element::{Element, Floating};
    pub use crate::math::{dot_product, minimum};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;
    use crate::utils::bench::DEFAULT_SEED;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        println!("Verifying {} reductions...", algorithms.len());

        for algo in algorithms {
            let report = algo.verify(DEFAULT_SEED).unwrap();
            assert!(!report.checks.is_empty(), "{} has no variants to check", algo.name());
            assert!(report.passed(), "{}: {:?}", algo.name(), report.first_failure());
            if let Err(e) = report.into_result() {
                panic!("  ❌ Reduction '{}' failed verification: {}", algo.name(), e);
            }
            println!("  ✅ Reduction '{}' passed verification", algo.name());
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["dot_product", "minimum"]);
        assert!(registry.find("minimum").is_some());
        assert!(registry.find("sort").is_none());
        for algo in registry.all() {
            assert_eq!(algo.available_variants()[0], "original");
        }
    }
}
