//! Shared benchmark utilities.
//!
//! Input generation, size sweeps and throughput arithmetic used by every
//! reduction.

use crate::element::Element;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Seed used by the correctness harness and by default in benchmarks.
pub const DEFAULT_SEED: u64 = 420;

/// Smallest buffer in a benchmark sweep.
pub const DEFAULT_MIN_BYTES: usize = 1024;

/// Elements a single timed sample should touch at least.
const TARGET_ELEMENTS_PER_SAMPLE: usize = 1 << 16;

/// Deterministic generator for reproducible inputs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fill `buf` with values drawn uniformly from `[-1, 1)`.
pub fn fill_uniform<T: Element, R: Rng>(buf: &mut [T], rng: &mut R) {
    let (lo, hi) = (T::from_f64(-1.0), T::from_f64(1.0));
    for v in buf.iter_mut() {
        *v = rng.random_range(lo..hi);
    }
}

/// A fresh sequence of `n` values uniform on `[-1, 1)`.
pub fn generate_sequence<T: Element, R: Rng>(n: usize, rng: &mut R) -> Vec<T> {
    let mut seq = vec![T::ZERO; n];
    fill_uniform(&mut seq, rng);
    seq
}

/// Shuffle a slice with a seeded generator.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = seeded_rng(seed);
    slice.shuffle(&mut rng);
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Byte sizes `min, 2*min, 4*min, ...` up to and including `max`.
pub fn size_sweep(min: usize, max: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut size = min.max(1);
    while size <= max {
        sizes.push(size);
        match size.checked_mul(2) {
            Some(next) => size = next,
            None => break,
        }
    }
    sizes
}

/// Number of kernel calls timed together in one sample for `n` elements.
pub fn batch_size(n: usize) -> usize {
    (TARGET_ELEMENTS_PER_SAMPLE / n.max(1)).max(1)
}

/// Throughput in GiB/s for `bytes` processed in `time`.
pub fn throughput_gbs(bytes: usize, time: Duration) -> f64 {
    let secs = time.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    (bytes as f64 / (1u64 << 30) as f64) / secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_sweep_is_geometric() {
        assert_eq!(size_sweep(1024, 8192), vec![1024, 2048, 4096, 8192]);
        assert_eq!(size_sweep(1024, 5000), vec![1024, 2048, 4096]);
        assert!(size_sweep(4096, 1024).is_empty());
    }

    #[test]
    fn test_generate_sequence_is_seeded_and_bounded() {
        let a: Vec<f64> = generate_sequence(1000, &mut seeded_rng(7));
        let b: Vec<f64> = generate_sequence(1000, &mut seeded_rng(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (-1.0..1.0).contains(&v)));
    }

    #[test]
    fn test_batch_size() {
        assert_eq!(batch_size(0), TARGET_ELEMENTS_PER_SAMPLE);
        assert_eq!(batch_size(TARGET_ELEMENTS_PER_SAMPLE * 4), 1);
    }

    #[test]
    fn test_throughput() {
        let gbs = throughput_gbs(1 << 30, Duration::from_secs(2));
        assert!((gbs - 0.5).abs() < 1e-12);
        assert_eq!(throughput_gbs(1024, Duration::ZERO), 0.0);
    }
}
