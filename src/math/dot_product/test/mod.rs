//! Tests for dot product implementations.

use super::code::*;
use super::verify_on;
use crate::element::{Element, Floating};
use crate::error::{check_lengths, Error};
use crate::utils::bench::{generate_sequence, seeded_rng};
use crate::utils::verify::{relative_error, Tolerance, VerifyReport};

const LARGE_PRIME: usize = 10_007;

/// Values in [1, 3): no cancellation, so relative error stays meaningful.
fn positive_sequence<T: Element>(n: usize, seed: u64) -> Vec<T> {
    generate_sequence::<f64, _>(n, &mut seeded_rng(seed))
        .into_iter()
        .map(|v| T::from_f64(v + 2.0))
        .collect()
}

fn lengths_for(f: usize) -> [usize; 7] {
    [0, 1, f - 1, f, f + 1, 2 * f, LARGE_PRIME]
}

fn assert_agrees<T: Element>(expected: T, actual: T, tolerance: f64, msg: &str) {
    let err = relative_error(expected.to_f64(), actual.to_f64());
    assert!(
        err < tolerance,
        "{}: expected {}, got {}, relative error = {:e}",
        msg,
        expected,
        actual,
        err
    );
}

fn check_unrolled<const F: usize>() {
    for n in lengths_for(F) {
        let x: Vec<f64> = positive_sequence(n, 1 + n as u64);
        let y: Vec<f64> = positive_sequence(n, 2 + n as u64);
        let expected = dot_product_original(&x, &y);
        let actual = dot_product_unrolled::<f64, F>(&x, &y);
        assert_agrees(expected, actual, 1e-12, &format!("unroll-{} n={}", F, n));
    }
}

#[test]
fn test_original_basic() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [5.0, 6.0, 7.0, 8.0];
    // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
    assert_eq!(dot_product_original(&x, &y), 70.0);
}

#[test]
fn test_original_single() {
    assert_eq!(dot_product_original(&[3.0f32], &[4.0f32]), 12.0);
}

#[test]
fn test_empty_is_zero() {
    let empty: [f64; 0] = [];
    assert_eq!(dot_product_original(&empty, &empty), 0.0);
    assert_eq!(dot_product_unrolled::<f64, 2>(&empty, &empty), 0.0);
    assert_eq!(dot_product_unrolled::<f64, 16>(&empty, &empty), 0.0);
    assert_eq!(dot_product_unrolled::<f32, 4>(&[], &[]), 0.0f32);
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
    let x = [1.0, 2.0, 3.0];
    let y = [1.0, 1.0, 1.0];
    assert_eq!(dot_product_unrolled::<f64, 16>(&x, &y), 6.0);
    assert_eq!(dot_product_unrolled::<f64, 1>(&x, &y), 6.0);
}

#[test]
fn test_scenario_five_ones_two_lanes() {
    // lanes {2, 2} after the main loop, index 4 peeled into lane 0 -> {3, 2}
    let ones = [1.0f64; 5];
    assert_eq!(dot_product_unrolled::<f64, 2>(&ones, &ones), 5.0);
}

#[test]
fn test_peeling_includes_trailing_elements() {
    for &(f, n) in &[(2usize, 7usize), (4, 11), (8, 21), (16, 47)] {
        let r = n % f;
        assert_ne!(r, 0);
        let mut x = vec![0.0f64; n];
        for v in &mut x[n - r..] {
            *v = 1.0;
        }
        let y = vec![2.0f64; n];
        let expected = 2.0 * r as f64;

        let got = match f {
            2 => dot_product_unrolled::<f64, 2>(&x, &y),
            4 => dot_product_unrolled::<f64, 4>(&x, &y),
            8 => dot_product_unrolled::<f64, 8>(&x, &y),
            _ => dot_product_unrolled::<f64, 16>(&x, &y),
        };
        assert_eq!(got, expected, "unroll-{} n={} dropped its remainder", f, n);
    }
}

#[test]
fn test_different_factors_agree() {
    let x: Vec<f64> = positive_sequence(LARGE_PRIME, 31);
    let y: Vec<f64> = positive_sequence(LARGE_PRIME, 32);
    let a = dot_product_unrolled::<f64, 4>(&x, &y);
    let b = dot_product_unrolled::<f64, 16>(&x, &y);
    assert_agrees(a, b, 2e-12, "unroll-4 vs unroll-16");
}

#[test]
fn test_harness_rejects_kernel_without_peeling() {
    fn no_peeling(x: &[f64], y: &[f64]) -> f64 {
        let mut acc = [0.0f64; 4];
        let mut i = 0;
        while i + 4 <= x.len() {
            for j in 0..4 {
                acc[j] += x[i + j] * y[i + j];
            }
            i += 4;
        }
        acc.iter().sum()
    }

    let x: Vec<f64> = positive_sequence(LARGE_PRIME, 5);
    let y: Vec<f64> = positive_sequence(LARGE_PRIME, 6);
    let mut report = VerifyReport::new("dot_product", Tolerance::Relative(1e-12));
    report.record("no-peeling", dot_product_original(&x, &y), no_peeling(&x, &y));

    assert!(matches!(
        report.into_result(),
        Err(Error::ToleranceViolation { .. })
    ));
}

#[test]
fn test_length_mismatch_is_reported() {
    let x: [Floating; 2] = [1.0, 2.0];
    let y: [Floating; 1] = [1.0];
    assert_eq!(
        check_lengths(&x, &y),
        Err(Error::LengthMismatch { left: 2, right: 1 })
    );
    assert!(matches!(verify_on(&x, &y), Err(Error::LengthMismatch { .. })));
}

#[test]
#[should_panic(expected = "same length")]
fn test_kernel_panics_on_length_mismatch() {
    dot_product_unrolled::<f64, 4>(&[1.0, 2.0], &[1.0]);
}

#[test]
fn test_every_variant_agrees_on_random_input() {
    let x: Vec<Floating> = positive_sequence(4099, 420);
    let y: Vec<Floating> = positive_sequence(4099, 421);
    let report = verify_on(&x, &y).unwrap();
    for check in &report.checks {
        assert!(check.passed, "{} error {:e}", check.kernel, check.metric);
    }
}

#[cfg(feature = "simd")]
#[test]
fn test_simd_matches_original() {
    for n in lengths_for(8) {
        let x: Vec<f64> = positive_sequence(n, 40 + n as u64);
        let y: Vec<f64> = positive_sequence(n, 41 + n as u64);
        assert_agrees(
            dot_product_original(&x, &y),
            dot_product_simd(&x, &y),
            1e-12,
            &format!("simd f64 n={}", n),
        );

        let x: Vec<f32> = positive_sequence(n, 42 + n as u64);
        let y: Vec<f32> = positive_sequence(n, 43 + n as u64);
        assert_agrees(
            dot_product_original(&x, &y),
            dot_product_simd(&x, &y),
            <f32 as Element>::DOT_TOLERANCE,
            &format!("simd f32 n={}", n),
        );
    }
    assert_eq!(dot_product_simd::<f64>(&[], &[]), 0.0);
}

#[cfg(c_implementation_active)]
#[test]
fn test_external_matches_original() {
    for n in lengths_for(16) {
        let x: Vec<f64> = positive_sequence(n, 50 + n as u64);
        let y: Vec<f64> = positive_sequence(n, 51 + n as u64);
        assert_agrees(
            dot_product_original(&x, &y),
            dot_product_c(&x, &y),
            1e-12,
            &format!("c f64 n={}", n),
        );

        let x: Vec<f32> = positive_sequence(n, 52 + n as u64);
        let y: Vec<f32> = positive_sequence(n, 53 + n as u64);
        assert_agrees(
            dot_product_original(&x, &y),
            dot_product_c(&x, &y),
            <f32 as Element>::DOT_TOLERANCE,
            &format!("c f32 n={}", n),
        );
    }
}
