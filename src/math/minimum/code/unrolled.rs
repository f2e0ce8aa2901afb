//! Manually unrolled minimum with `F` independent lanes.

use crate::element::Element;

/// Smallest value of `x`, tracked in `F` lanes.
///
/// Lane `j` sees indices `j, j + F, j + 2F, ...`. The trailing `len % F`
/// elements are peeled into lanes `0..len % F` only; lanes past the
/// remainder are left untouched. Unlike the sum, the lane combine is exact,
/// so the result equals [`minimum_original`](super::minimum_original)
/// bit for bit.
pub fn minimum_unrolled<T: Element, const F: usize>(x: &[T]) -> T {
    const { assert!(F >= 1, "unroll factor must be at least 1") };

    let n = x.len();
    let mut acc = [T::MAX; F];
    let mut i = 0;

    while i + F <= n {
        for j in 0..F {
            acc[j] = T::min_of(acc[j], x[i + j]);
        }
        i += F;
    }

    // Loop peeling
    for j in 0..n - i {
        acc[j] = T::min_of(acc[j], x[i + j]);
    }

    acc.iter().fold(T::MAX, |m, &lane| T::min_of(m, lane))
}
