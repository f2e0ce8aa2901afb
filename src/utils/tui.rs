//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for both binaries.

use crate::element::{Element, Floating};
use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::buffer::{InputBuffer, MAX_BUFFER_BYTES};
use crate::utils::runner::ThroughputRecord;
use crate::utils::simd::backend;
use crate::utils::timer::TimingConfig;
use crate::utils::verify::VerifyReport;
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Format a duration with a unit that keeps three significant digits.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1e6)
    } else {
        format!("{:.2} s", nanos as f64 / 1e9)
    }
}

/// Format a byte count with a binary unit.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 || value.fract() == 0.0 {
        format!("{} {}", value as usize, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn display_name(variant: &str) -> String {
    match (variant.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
        (true, Some(c)) => format!("{} ({})", variant, c),
        _ => variant.to_string(),
    }
}

/// Print the application header
pub fn print_header(title: &str) {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = format!(" {} ", title);
    let padding = term_width.saturating_sub(title.chars().count() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.chars().count());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the build and machine context every measurement depends on.
pub fn print_environment(input: &InputBuffer, config: &TimingConfig, seed: u64) {
    let backend = backend();
    println!("  Precision:  {}", Floating::PRECISION);
    println!("  Memory:     {} ({})", input.layout().name(), format_bytes(input.bytes()));
    println!(
        "  Vector:     {} ({}-byte registers)",
        backend.name(),
        backend.register_bytes()
    );
    println!(
        "  C compiler: {}",
        crate::utils::C_COMPILER_NAME.unwrap_or("none")
    );
    println!(
        "  Runs:       {} per variant, seed {}",
        config.runs_per_variant, seed
    );
    println!("  Pinning:    {}", config.pin_strategy.name());
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: reduce-bench [OPTIONS] [REDUCTION]");
    println!();
    println!("Options:");
    println!("  --list, -l         List all available reductions");
    println!("  --help, -h         Show this help message");
    println!("  --min-bytes N      Smallest input size in bytes (default: 1024)");
    println!(
        "  --max-bytes N      Largest input size in bytes (default: {})",
        MAX_BUFFER_BYTES
    );
    println!("  --runs N, -r N     Number of measurement runs per variant (default: 30)");
    println!("  --seed N           Random seed for the input data (default: 420)");
    println!("  --pin MODE         CPU pinning: per-sample, global or off (default: per-sample)");
    println!("  --csv PATH         Export every measurement to a CSV file");
    println!();
    println!("Arguments:");
    println!("  REDUCTION          Name of a single reduction to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  reduce-bench                          # Run all reductions");
    println!("  reduce-bench minimum                  # Run only minimum");
    println!("  reduce-bench --max-bytes 1048576      # Stop the sweep at 1 MiB");
    println!("  reduce-bench --csv results.csv        # Export timings to CSV");
}

/// Print the list of available reductions
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available reductions:");
    println!();
    for algo in registry.all() {
        println!("  {:<14} - {}", algo.name(), algo.description());
        println!("  {:<14}   variants: {}", "", algo.available_variants().join(", "));
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let name_line = format!("Reduction: {}", algo.name());
    let desc_line = algo.description();
    let var_line = format!("Variants:  {}", algo.available_variants().join(", "));

    let content_width = [name_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Width of the variant column: whatever the terminal leaves after the
/// numeric columns, but never narrower than the longest variant name.
fn variant_column_width(names: &[String], term_width: usize) -> usize {
    let longest = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    term_width.saturating_sub(66).max(20).max(longest)
}

/// Print results table for a single size.
///
/// Speedup is relative to the first record, which is `original`.
pub fn print_results_table(records: &[ThroughputRecord], bytes: usize, runs: usize) {
    let Some(baseline) = records.first() else {
        return;
    };

    let names: Vec<String> = records.iter().map(|r| display_name(&r.variant)).collect();
    let variant_col_width = variant_column_width(&names, get_term_width());
    let table_width = variant_col_width + 58 + 6;

    let baseline_time = baseline.avg_time.as_nanos().max(1) as f64;

    println!("  Size: {} ({} runs)", format_bytes(bytes), runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>11} {:>11} {:>11} {:>10} {:>8} {:>7}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "GiB/s",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for (r, name) in records.iter().zip(&names) {
        let avg_ns = r.avg_time.as_nanos() as f64;
        let speedup = baseline_time / avg_ns.max(1.0);
        let cv = if avg_ns > 0.0 {
            r.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        println!(
            "  {:<v_width$} {:>11} {:>11} {:>11} {:>10.2} {:>7.2}x {:>6.1}%",
            truncate(name, variant_col_width),
            format_duration(r.avg_time),
            format_duration(r.median_time),
            format_duration(r.min_time),
            r.throughput_gbs,
            speedup,
            cv * 100.0,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print one `name metric` line per kernel, as `reduce-verify` reports them.
pub fn print_verify_report(report: &VerifyReport) {
    for check in &report.checks {
        let mark = if check.passed { "" } else { "  FAILED" };
        println!(
            "{}/{} {:e}{}",
            report.operation, check.kernel, check.metric, mark
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(1 << 28), "256 MiB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(999)), "999 ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.50 µs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12.00 ms");
    }

    #[test]
    fn test_variant_column_fits_compiler_name() {
        let names = vec![
            "original".to_string(),
            "c-vectorized (Apple Clang)".to_string(),
        ];
        assert_eq!(variant_column_width(&names, 40), 26);
        assert_eq!(variant_column_width(&names[..1], 80), 20);
        assert_eq!(variant_column_width(&names, 200), 134);

        let width = variant_column_width(&names, 80);
        assert_eq!(truncate(&names[1], width), names[1]);
    }

    #[test]
    fn test_display_name_tags_external_variants() {
        assert_eq!(display_name("unroll-8"), "unroll-8");
        match crate::utils::C_COMPILER_NAME {
            Some(c) => assert_eq!(display_name("c-vectorized"), format!("c-vectorized ({})", c)),
            None => assert_eq!(display_name("c-vectorized"), "c-vectorized"),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("unroll-16", 20), "unroll-16");
        assert_eq!(truncate("c-vectorized (gcc)", 8), "c-vec...");
    }
}
