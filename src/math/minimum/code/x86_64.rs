//! x86_64 SSE2 and AVX2 minimum kernels.
//!
//! Lanes start at the type's largest finite value. The tail is folded with a
//! scalar loop after the horizontal minimum.

use crate::element::Element;
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn hmin_ps(v: __m128) -> f32 {
    let shuf = _mm_shuffle_ps::<0b10_11_00_01>(v, v);
    let mins = _mm_min_ps(v, shuf);
    let shuf = _mm_movehl_ps(shuf, mins);
    _mm_cvtss_f32(_mm_min_ss(mins, shuf))
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn hmin_pd(v: __m128d) -> f64 {
    let hi = _mm_unpackhi_pd(v, v);
    _mm_cvtsd_f64(_mm_min_sd(v, hi))
}

/// # Safety
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn min_f32_sse2(x: &[f32]) -> f32 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = _mm_set1_ps(f32::MAX);
    let mut i = 0;

    while i + 4 <= n {
        acc = _mm_min_ps(_mm_loadu_ps(px.add(i)), acc);
        i += 4;
    }

    let mut result = hmin_ps(acc);
    for &v in &x[i..] {
        result = f32::min_of(result, v);
    }
    result
}

/// # Safety
/// The CPU must support SSE2.
#[target_feature(enable = "sse2")]
pub unsafe fn min_f64_sse2(x: &[f64]) -> f64 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = _mm_set1_pd(f64::MAX);
    let mut i = 0;

    while i + 2 <= n {
        acc = _mm_min_pd(_mm_loadu_pd(px.add(i)), acc);
        i += 2;
    }

    let mut result = hmin_pd(acc);
    for &v in &x[i..] {
        result = f64::min_of(result, v);
    }
    result
}

/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn min_f32_avx2(x: &[f32]) -> f32 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = _mm256_set1_ps(f32::MAX);
    let mut i = 0;

    while i + 8 <= n {
        acc = _mm256_min_ps(_mm256_loadu_ps(px.add(i)), acc);
        i += 8;
    }

    let lo = _mm256_castps256_ps128(acc);
    let hi = _mm256_extractf128_ps::<1>(acc);
    let mut result = hmin_ps(_mm_min_ps(lo, hi));
    for &v in &x[i..] {
        result = f32::min_of(result, v);
    }
    result
}

/// # Safety
/// The CPU must support AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn min_f64_avx2(x: &[f64]) -> f64 {
    let n = x.len();
    let px = x.as_ptr();
    let mut acc = _mm256_set1_pd(f64::MAX);
    let mut i = 0;

    while i + 4 <= n {
        acc = _mm256_min_pd(_mm256_loadu_pd(px.add(i)), acc);
        i += 4;
    }

    let lo = _mm256_castpd256_pd128(acc);
    let hi = _mm256_extractf128_pd::<1>(acc);
    let mut result = hmin_pd(_mm_min_pd(lo, hi));
    for &v in &x[i..] {
        result = f64::min_of(result, v);
    }
    result
}
