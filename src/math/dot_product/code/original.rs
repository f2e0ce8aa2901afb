//! Original (reference) implementation of dot product.
//!
//! A single running accumulator visited in index order. Every other variant
//! is checked against this one.

use crate::element::Element;

/// Compute the dot product of two sequences.
///
/// # Panics
/// Panics if the sequences have different lengths.
///
/// # Example
/// ```
/// use micro_reduce::math::dot_product::dot_product_original;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_original(&x, &y), 32.0);
/// ```
pub fn dot_product_original<T: Element>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "Sequences must have the same length");

    let mut acc = T::ZERO;
    for i in 0..x.len() {
        acc = acc + x[i] * y[i];
    }
    acc
}
