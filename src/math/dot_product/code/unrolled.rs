//! Manually unrolled dot product with `F` independent lanes.
//!
//! Lane `j` accumulates the products at indices `j, j + F, j + 2F, ...`,
//! which breaks the serial dependency of the single-accumulator loop.

use crate::element::Element;

/// Compute the dot product with `F` partial sums.
///
/// The trailing `len % F` products are folded into lanes `0..len % F`, so
/// every index is visited exactly once. The lanes are summed at the end,
/// which reorders the floating-point additions relative to
/// [`dot_product_original`](super::dot_product_original).
///
/// # Panics
/// Panics if the sequences have different lengths.
pub fn dot_product_unrolled<T: Element, const F: usize>(x: &[T], y: &[T]) -> T {
    const { assert!(F >= 1, "unroll factor must be at least 1") };
    assert_eq!(x.len(), y.len(), "Sequences must have the same length");

    let n = x.len();
    let mut acc = [T::ZERO; F];
    let mut i = 0;

    while i + F <= n {
        for j in 0..F {
            acc[j] = acc[j] + x[i + j] * y[i + j];
        }
        i += F;
    }

    // Loop peeling: the remainder reuses the first lanes
    for j in 0..n - i {
        acc[j] = acc[j] + x[i + j] * y[i + j];
    }

    acc.iter().fold(T::ZERO, |sum, &lane| sum + lane)
}
