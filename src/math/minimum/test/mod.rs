//! Tests for minimum implementations.

use super::code::*;
use super::verify_on;
use crate::element::{Element, Floating};
use crate::error::Error;
use crate::utils::bench::{generate_sequence, seeded_rng};
use crate::utils::verify::{Tolerance, VerifyReport};

const LARGE_PRIME: usize = 10_007;

fn random_sequence<T: Element>(n: usize, seed: u64) -> Vec<T> {
    generate_sequence(n, &mut seeded_rng(seed))
}

fn lengths_for(f: usize) -> [usize; 7] {
    [0, 1, f - 1, f, f + 1, 2 * f, LARGE_PRIME]
}

fn check_unrolled<const F: usize>() {
    for n in lengths_for(F) {
        let x: Vec<f64> = random_sequence(n, 7 + n as u64);
        assert_eq!(
            minimum_unrolled::<f64, F>(&x),
            minimum_original(&x),
            "unroll-{} n={}",
            F,
            n
        );

        let x: Vec<f32> = random_sequence(n, 8 + n as u64);
        assert_eq!(minimum_unrolled::<f32, F>(&x), minimum_original(&x));
    }
}

/// Sequence whose unique minimum sits in the last `n % f` positions.
fn trailing_minimum(n: usize, f: usize) -> Vec<f64> {
    let mut x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    x[n - 1 - (n % f) / 2] = -100.0;
    x
}

#[test]
fn test_original_basic() {
    assert_eq!(minimum_original(&[3.0, -1.0, 2.0, -5.0, 0.5]), -5.0);
    assert_eq!(minimum_original(&[7.0f32]), 7.0);
}

#[test]
fn test_empty_is_identity() {
    let empty: [f64; 0] = [];
    assert_eq!(minimum_original(&empty), f64::MAX);
    assert_eq!(minimum_unrolled::<f64, 8>(&empty), f64::MAX);
    assert_eq!(minimum_unrolled::<f32, 4>(&[]), f32::MAX);
}

#[test]
fn test_scenario_four_lanes() {
    // main loop covers [3, -1, 2, -5], 0.5 is peeled into lane 0
    let x = [3.0, -1.0, 2.0, -5.0, 0.5];
    assert_eq!(minimum_unrolled::<f64, 4>(&x), -5.0);
}

#[test]
fn test_unrolled_matches_original_for_all_factors() {
    check_unrolled::<2>();
    check_unrolled::<4>();
    check_unrolled::<8>();
    check_unrolled::<16>();
}

#[test]
fn test_unroll_factor_larger_than_length() {
    let x = [4.0, 2.0, 9.0];
    assert_eq!(minimum_unrolled::<f64, 16>(&x), 2.0);
    assert_eq!(minimum_unrolled::<f64, 1>(&x), 2.0);
}

#[test]
fn test_peeling_sees_trailing_minimum() {
    for &(f, n) in &[(2usize, 9usize), (4, 11), (8, 23), (16, 47)] {
        assert_ne!(n % f, 0);
        let x = trailing_minimum(n, f);
        let got = match f {
            2 => minimum_unrolled::<f64, 2>(&x),
            4 => minimum_unrolled::<f64, 4>(&x),
            8 => minimum_unrolled::<f64, 8>(&x),
            _ => minimum_unrolled::<f64, 16>(&x),
        };
        assert_eq!(got, -100.0, "unroll-{} n={} missed the remainder", f, n);
    }
}

#[test]
fn test_harness_rejects_kernel_without_peeling() {
    fn no_peeling(x: &[f64]) -> f64 {
        let mut acc = [f64::MAX; 4];
        let mut i = 0;
        while i + 4 <= x.len() {
            for j in 0..4 {
                acc[j] = f64::min_of(acc[j], x[i + j]);
            }
            i += 4;
        }
        acc.iter().fold(f64::MAX, |m, &v| f64::min_of(m, v))
    }

    let x = trailing_minimum(LARGE_PRIME, 4);
    let mut report = VerifyReport::new("minimum", Tolerance::Exact);
    report.record("no-peeling", minimum_original(&x), no_peeling(&x));

    assert!(matches!(
        report.into_result(),
        Err(Error::ToleranceViolation { metric, .. }) if metric > 0.0
    ));
}

#[test]
fn test_every_variant_matches_exactly() {
    let x: Vec<Floating> = random_sequence(4099, 420);
    let report = verify_on(&x);
    assert!(!report.checks.is_empty());
    for check in &report.checks {
        assert_eq!(check.metric, 0.0, "{} disagreed", check.kernel);
        assert!(check.passed);
    }
}

#[test]
fn test_every_variant_on_empty_input() {
    let report = verify_on(&[]);
    for check in &report.checks {
        assert_eq!(check.actual, Floating::MAX.to_f64(), "{}", check.kernel);
    }
}

#[cfg(feature = "simd")]
#[test]
fn test_simd_matches_original() {
    for n in lengths_for(8) {
        let x: Vec<f64> = random_sequence(n, 60 + n as u64);
        assert_eq!(minimum_simd(&x), minimum_original(&x), "simd f64 n={}", n);

        let x: Vec<f32> = random_sequence(n, 61 + n as u64);
        assert_eq!(minimum_simd(&x), minimum_original(&x), "simd f32 n={}", n);
    }
    assert_eq!(minimum_simd(&trailing_minimum(23, 8)), -100.0);
}

#[cfg(c_implementation_active)]
#[test]
fn test_external_matches_original() {
    for n in lengths_for(16) {
        let x: Vec<f64> = random_sequence(n, 70 + n as u64);
        assert_eq!(minimum_c(&x), minimum_original(&x), "c f64 n={}", n);

        let x: Vec<f32> = random_sequence(n, 71 + n as u64);
        assert_eq!(minimum_c(&x), minimum_original(&x), "c f32 n={}", n);
    }
}
