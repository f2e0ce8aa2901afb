//! Utility modules for benchmarking, verification and execution.

pub mod bench;
pub mod buffer;
pub mod cpu_affinity;
pub mod runner;
pub mod simd;
pub mod timer;
pub mod tui;
pub mod verify;

// Re-export commonly used items
pub use bench::{generate_sequence, seeded_rng, shuffle, size_sweep, time_seed};
pub use buffer::{InputBuffer, MemoryLayout, MAX_BUFFER_BYTES};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};
pub use verify::{KernelCheck, Tolerance, VerifyReport};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about a kernel variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "unroll-4")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
