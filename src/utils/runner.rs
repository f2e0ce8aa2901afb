//! Benchmark sweep over sizes and reductions, plus CSV export.

use std::io::Write;
use std::time::Duration;

use crate::element::{Element, Floating};
use crate::registry::AlgorithmRunner;
use crate::utils::bench::throughput_gbs;
use crate::utils::buffer::InputBuffer;
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// One measurement row: a variant of a reduction at one input size.
#[derive(Clone, Debug)]
pub struct ThroughputRecord {
    pub reduction: &'static str,
    pub variant: String,
    pub bytes: usize,
    /// `float` or `double`
    pub precision: &'static str,
    /// `static memory` or `heap memory`
    pub memory: &'static str,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// GiB per second at the average time
    pub throughput_gbs: f64,
    pub result_sample: f64,
}

impl ThroughputRecord {
    pub fn from_result(
        reduction: &'static str,
        bytes: usize,
        input: &InputBuffer,
        result: &VariantResult,
    ) -> Self {
        Self {
            reduction,
            variant: result.name.clone(),
            bytes,
            precision: Floating::PRECISION,
            memory: input.layout().name(),
            avg_time: result.avg_time,
            median_time: result.median_time,
            min_time: result.min_time,
            max_time: result.max_time,
            std_dev: result.std_dev,
            throughput_gbs: throughput_gbs(bytes, result.avg_time),
            result_sample: result.result_sample,
        }
    }

    /// Compiler name for externally compiled variants, empty otherwise.
    pub fn compiler(&self) -> &'static str {
        if self.variant.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("unknown")
        } else {
            ""
        }
    }
}

/// Measure every variant of `algo` at one size.
pub fn measure_size(
    algo: &dyn AlgorithmRunner,
    input: &InputBuffer,
    bytes: usize,
    config: &TimingConfig,
) -> Vec<ThroughputRecord> {
    let variants = algo.get_variant_closures(input, bytes);
    measure_variants(variants, config)
        .iter()
        .map(|r| ThroughputRecord::from_result(algo.name(), bytes, input, r))
        .collect()
}

/// Run every reduction over every size, calling `on_size` after each batch
/// of records so the caller can print as results arrive.
pub fn run_sweep<F>(
    algos: &[&dyn AlgorithmRunner],
    input: &InputBuffer,
    sizes: &[usize],
    config: &TimingConfig,
    mut on_size: F,
) -> Vec<ThroughputRecord>
where
    F: FnMut(&dyn AlgorithmRunner, usize, &[ThroughputRecord]),
{
    let mut records = Vec::new();

    for &algo in algos {
        for &bytes in sizes {
            let batch = measure_size(algo, input, bytes, config);
            on_size(algo, bytes, &batch);
            records.extend(batch);
        }
    }

    records
}

pub const CSV_HEADER: &str = "reduction,variant,compiler,precision,memory,bytes,\
avg_time_ns,median_time_ns,min_time_ns,max_time_ns,std_dev_ns,throughput_gbs,result";

/// Write records as CSV, one line per record.
pub fn write_csv<W: Write>(mut out: W, records: &[ThroughputRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;

    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{:.6},{}",
            r.reduction,
            r.variant,
            r.compiler(),
            r.precision,
            r.memory,
            r.bytes,
            r.avg_time.as_nanos(),
            r.median_time.as_nanos(),
            r.min_time.as_nanos(),
            r.max_time.as_nanos(),
            r.std_dev.as_nanos(),
            r.throughput_gbs,
            r.result_sample
        )?;
    }

    Ok(())
}

/// Export records to a CSV file
pub fn export_csv(path: &str, records: &[ThroughputRecord]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), records)
}
