//! x86_64 SSE2 and AVX2 dot product kernels.
//!
//! One vector accumulator, one multiply and one add per step, a scalar tail
//! loop for the remainder and a horizontal sum at the end.

use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn hsum_ps(v: __m128) -> f32 {
    // v = [a, b, c, d]
    let shuf = _mm_shuffle_ps::<0b10_11_00_01>(v, v); // [b, a, d, c]
    let sums = _mm_add_ps(v, shuf); // [a+b, a+b, c+d, c+d]
    let shuf = _mm_movehl_ps(shuf, sums); // [c+d, ...]
    _mm_cvtss_f32(_mm_add_ss(sums, shuf))
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn hsum_pd(v: __m128d) -> f64 {
    let hi = _mm_unpackhi_pd(v, v);
    _mm_cvtsd_f64(_mm_add_sd(v, hi))
}

/// # Safety
/// `x` and `y` must have the same length.
#[target_feature(enable = "sse2")]
pub unsafe fn dot_f32_sse2(x: &[f32], y: &[f32]) -> f32 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = _mm_setzero_ps();
    let mut i = 0;

    while i + 4 <= n {
        let vx = _mm_loadu_ps(px.add(i));
        let vy = _mm_loadu_ps(py.add(i));
        acc = _mm_add_ps(acc, _mm_mul_ps(vx, vy));
        i += 4;
    }

    let mut tail = 0.0f32;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    hsum_ps(acc) + tail
}

/// # Safety
/// `x` and `y` must have the same length.
#[target_feature(enable = "sse2")]
pub unsafe fn dot_f64_sse2(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = _mm_setzero_pd();
    let mut i = 0;

    while i + 2 <= n {
        let vx = _mm_loadu_pd(px.add(i));
        let vy = _mm_loadu_pd(py.add(i));
        acc = _mm_add_pd(acc, _mm_mul_pd(vx, vy));
        i += 2;
    }

    let mut tail = 0.0f64;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    hsum_pd(acc) + tail
}

/// # Safety
/// The CPU must support AVX2 and `x` and `y` must have the same length.
#[target_feature(enable = "avx2")]
pub unsafe fn dot_f32_avx2(x: &[f32], y: &[f32]) -> f32 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = _mm256_setzero_ps();
    let mut i = 0;

    while i + 8 <= n {
        let vx = _mm256_loadu_ps(px.add(i));
        let vy = _mm256_loadu_ps(py.add(i));
        acc = _mm256_add_ps(acc, _mm256_mul_ps(vx, vy));
        i += 8;
    }

    let mut tail = 0.0f32;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    // [a..h] -> [a+e, b+f, c+g, d+h]
    let lo = _mm256_castps256_ps128(acc);
    let hi = _mm256_extractf128_ps::<1>(acc);
    hsum_ps(_mm_add_ps(lo, hi)) + tail
}

/// # Safety
/// The CPU must support AVX2 and `x` and `y` must have the same length.
#[target_feature(enable = "avx2")]
pub unsafe fn dot_f64_avx2(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let (px, py) = (x.as_ptr(), y.as_ptr());
    let mut acc = _mm256_setzero_pd();
    let mut i = 0;

    while i + 4 <= n {
        let vx = _mm256_loadu_pd(px.add(i));
        let vy = _mm256_loadu_pd(py.add(i));
        acc = _mm256_add_pd(acc, _mm256_mul_pd(vx, vy));
        i += 4;
    }

    let mut tail = 0.0f64;
    while i < n {
        tail += *px.add(i) * *py.add(i);
        i += 1;
    }

    let lo = _mm256_castpd256_pd128(acc);
    let hi = _mm256_extractf128_pd::<1>(acc);
    hsum_pd(_mm_add_pd(lo, hi)) + tail
}
