//! Timing system for the benchmark sweep.
//!
//! - Wall-clock measurement of batched kernel calls
//! - CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias

use std::hint::black_box;
use std::str::FromStr;
use std::time::Duration;

use super::bench::{shuffle, time_seed};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around each sample
    #[default]
    PerExecution,
    /// Never pin
    Off,
}

impl PinStrategy {
    pub fn name(self) -> &'static str {
        match self {
            PinStrategy::Global => "global",
            PinStrategy::PerExecution => "per-sample",
            PinStrategy::Off => "off",
        }
    }
}

impl FromStr for PinStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(PinStrategy::Global),
            "per-sample" => Ok(PinStrategy::PerExecution),
            "off" => Ok(PinStrategy::Off),
            other => Err(format!("unknown pin strategy '{}'", other)),
        }
    }
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of untimed samples before measurement (default: 3)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the execution order, `None` for a time-based one
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 3,
            pin_strategy: PinStrategy::default(),
            schedule_seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one sample and returns (time per kernel call, kernel result).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Duration, f64) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average time per kernel call
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of timed samples
    pub samples: usize,
    /// Last kernel result, kept so the call cannot be optimized away
    pub result_sample: f64,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a randomized task schedule
/// 3. Measures each sample with CPU pinning
/// 4. Returns one result per variant, in input order
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant.max(1);

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, config.schedule_seed.unwrap_or_else(time_seed));

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<f64> = vec![0.0; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = black_box(result);
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            compute_variant_result(variant.name, variant.description, &times, result_samples[idx])
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: &[Duration],
    result_sample: f64,
) -> VariantResult {
    let mut result = VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::ZERO,
        median_time: Duration::ZERO,
        min_time: Duration::ZERO,
        max_time: Duration::ZERO,
        std_dev: Duration::ZERO,
        samples: times.len(),
        result_sample,
    };
    if times.is_empty() {
        return result;
    }

    let nanos: Vec<f64> = times.iter().map(|t| t.as_nanos() as f64).collect();
    let avg = nanos.iter().sum::<f64>() / nanos.len() as f64;
    let variance = nanos.iter().map(|n| (n - avg) * (n - avg)).sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    result.avg_time = Duration::from_nanos(avg.round() as u64);
    result.median_time = calculate_median(times);
    result.min_time = times.iter().copied().min().unwrap_or_default();
    result.max_time = times.iter().copied().max().unwrap_or_default();
    result.std_dev = Duration::from_nanos(variance.sqrt().round() as u64);
    result
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
