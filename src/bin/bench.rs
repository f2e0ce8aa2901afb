//! Throughput benchmark for every reduction.
//!
//! Usage:
//!   reduce-bench                  # Run all reductions
//!   reduce-bench --list           # List available reductions
//!   reduce-bench minimum          # Run a single reduction
//!   reduce-bench --help           # Show help

use micro_reduce::registry::{build_registry, AlgorithmRunner};
use micro_reduce::utils::bench::{size_sweep, DEFAULT_MIN_BYTES, DEFAULT_SEED};
use micro_reduce::utils::buffer::{InputBuffer, MAX_BUFFER_BYTES};
use micro_reduce::utils::runner::{export_csv, run_sweep};
use micro_reduce::utils::timer::TimingConfig;
use micro_reduce::utils::tui;
use std::env;
use std::process::exit;
use std::str::FromStr;

/// Parse the value following option `name`, or exit.
fn option_value<T: FromStr>(args: &[String], i: &mut usize, name: &str) -> T {
    *i += 1;
    match args.get(*i).map(|s| s.parse()) {
        Some(Ok(v)) => v,
        Some(Err(_)) => {
            eprintln!("Invalid value for {}: {}", name, args[*i]);
            exit(1);
        }
        None => {
            eprintln!("Missing value for {}", name);
            exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut min_bytes = DEFAULT_MIN_BYTES;
    let mut max_bytes = MAX_BUFFER_BYTES;
    let mut config = TimingConfig::default();
    let mut seed = DEFAULT_SEED;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--min-bytes" => min_bytes = option_value(&args, &mut i, "--min-bytes"),
            "--max-bytes" => max_bytes = option_value(&args, &mut i, "--max-bytes"),
            "--runs" | "-r" => config.runs_per_variant = option_value(&args, &mut i, "--runs"),
            "--seed" => seed = option_value(&args, &mut i, "--seed"),
            "--pin" => config.pin_strategy = option_value(&args, &mut i, "--pin"),
            "--csv" => csv_path = Some(option_value(&args, &mut i, "--csv")),
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let algos: Vec<&dyn AlgorithmRunner> = match &algorithm_filter {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Reduction '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let sizes = size_sweep(min_bytes, max_bytes);
    if sizes.is_empty() {
        eprintln!("No sizes between {} and {} bytes.", min_bytes, max_bytes);
        exit(1);
    }

    let input = match InputBuffer::allocate(max_bytes, seed) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };
    config.schedule_seed = Some(seed);

    tui::print_header("Reduction Throughput Benchmarks");
    tui::print_environment(&input, &config, seed);

    let mut current: Option<&'static str> = None;
    let records = run_sweep(&algos, &input, &sizes, &config, |algo, bytes, batch| {
        if current != Some(algo.name()) {
            tui::print_algo_info_box(algo);
            current = Some(algo.name());
        }
        tui::print_results_table(batch, bytes, config.runs_per_variant);
    });

    if let Some(path) = csv_path {
        match export_csv(&path, &records) {
            Ok(()) => println!("Wrote {} records to {}", records.len(), path),
            Err(e) => {
                eprintln!("Failed to write {}: {}", path, e);
                exit(1);
            }
        }
    }

    println!("Note: Speedup is relative to 'original'.");
}
