//! Reductions over slices of floating-point values.

pub mod dot_product;
pub mod minimum;
