//! aarch64 NEON minimum kernels.

use crate::element::Element;
use std::arch::aarch64::*;

/// # Safety
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
pub unsafe fn min_f32_neon(x: &[f32]) -> f32 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = vdupq_n_f32(f32::MAX);
    let mut i = 0;

    while i + 4 <= n {
        acc = vminq_f32(vld1q_f32(px.add(i)), acc);
        i += 4;
    }

    let mut result = vminvq_f32(acc);
    for &v in &x[i..] {
        result = f32::min_of(result, v);
    }
    result
}

/// # Safety
/// The CPU must support NEON.
#[target_feature(enable = "neon")]
pub unsafe fn min_f64_neon(x: &[f64]) -> f64 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = vdupq_n_f64(f64::MAX);
    let mut i = 0;

    while i + 2 <= n {
        acc = vminq_f64(vld1q_f64(px.add(i)), acc);
        i += 2;
    }

    let mut result = vminvq_f64(acc);
    for &v in &x[i..] {
        result = f64::min_of(result, v);
    }
    result
}
