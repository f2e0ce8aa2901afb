//! Original (reference) implementation of minimum.

use crate::element::Element;

/// Smallest value of `x`, or `T::MAX` when `x` is empty.
///
/// # Example
/// ```
/// use micro_reduce::math::minimum::minimum_original;
///
/// assert_eq!(minimum_original(&[3.0, -1.0, 2.0]), -1.0);
/// assert_eq!(minimum_original::<f64>(&[]), f64::MAX);
/// ```
pub fn minimum_original<T: Element>(x: &[T]) -> T {
    let mut acc = T::MAX;
    for &v in x {
        acc = T::min_of(acc, v);
    }
    acc
}
