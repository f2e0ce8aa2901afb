//! Benchmark closures for minimum.

use super::code::available_variants;
use crate::element::{Element, Floating};
use crate::utils::bench::batch_size;
use crate::utils::timer::Variant;
use std::hint::black_box;
use std::time::Instant;

pub fn variant_closures(x: &[Floating]) -> Vec<Variant<'_>> {
    let batch = batch_size(x.len());

    available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let mut result = Floating::MAX;
                    let start = Instant::now();
                    for _ in 0..batch {
                        result = black_box(func(black_box(x)));
                    }
                    let elapsed = start.elapsed() / batch as u32;
                    (elapsed, result.to_f64())
                }),
            }
        })
        .collect()
}
