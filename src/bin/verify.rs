//! Checks every variant of every reduction against its reference.
//!
//! Prints one `reduction/variant metric` line per kernel and exits with 1 on
//! the first disagreement.

use micro_reduce::registry::build_registry;
use micro_reduce::utils::bench::DEFAULT_SEED;
use micro_reduce::utils::tui;
use std::process::exit;

fn main() {
    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Usage: reduce-verify [SEED]");
                exit(1);
            }
        },
        None => DEFAULT_SEED,
    };

    let registry = build_registry();
    let mut failed = false;

    for algo in registry.all() {
        let report = match algo.verify(seed) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{}: {}", algo.name(), e);
                exit(1);
            }
        };
        tui::print_verify_report(&report);

        if !report.passed() {
            if let Some(e) = report.first_failure() {
                eprintln!("{}", e);
            }
            failed = true;
        }
    }

    if failed {
        exit(1);
    }
}
