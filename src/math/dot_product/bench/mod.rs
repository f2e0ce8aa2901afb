//! Benchmark closures for dot product.

use super::code::available_variants;
use crate::element::{Element, Floating};
use crate::utils::bench::batch_size;
use crate::utils::timer::Variant;
use std::hint::black_box;
use std::time::Instant;

/// One timed closure per variant, all reading the same `x` and `y`.
pub fn variant_closures<'a>(x: &'a [Floating], y: &'a [Floating]) -> Vec<Variant<'a>> {
    let batch = batch_size(x.len());

    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let mut result = Floating::ZERO;
                    let start = Instant::now();
                    for _ in 0..batch {
                        result = black_box(func(black_box(x), black_box(y)));
                    }
                    let elapsed = start.elapsed() / batch as u32;
                    (elapsed, result.to_f64())
                }),
            }
        })
        .collect()
}
