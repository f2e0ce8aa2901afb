//! aarch64 NEON dot product kernels.

use std::arch::aarch64::*;

/// # Safety
/// `x` and `y` must have the same length.
#[target_feature(enable = "neon")]
pub unsafe fn dot_f32_neon(x: &[f32], y: &[f32]) -> f32 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = vdupq_n_f32(0.0);
    let mut i = 0;

    while i + 4 <= n {
        let vx = vld1q_f32(px.add(i));
        let vy = vld1q_f32(py.add(i));
        acc = vaddq_f32(acc, vmulq_f32(vx, vy));
        i += 4;
    }

    let mut tail = 0.0f32;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    vaddvq_f32(acc) + tail
}

/// # Safety
/// `x` and `y` must have the same length.
#[target_feature(enable = "neon")]
pub unsafe fn dot_f64_neon(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = vdupq_n_f64(0.0);
    let mut i = 0;

    while i + 2 <= n {
        let vx = vld1q_f64(px.add(i));
        let vy = vld1q_f64(py.add(i));
        acc = vaddq_f64(acc, vmulq_f64(vx, vy));
        i += 2;
    }

    let mut tail = 0.0f64;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    vaddvq_f64(acc) + tail
}
