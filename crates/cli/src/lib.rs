//! Console driver for the records suite.
//!
//! Runs the five demo scenarios in sequence. A failing scenario is reported
//! and the remaining scenarios still run.

pub mod scenarios;


use std::path::Path;

use tracing::error;

/// File paths of the flat-file scenarios. No flags, no env vars beyond
/// `RUST_LOG` (logging filter).
pub const INVENTORY_LOG_PATH: &str = "inventory_log.json";
pub const ROSTER_PATH: &str = "students.txt";
pub const REPORT_PATH: &str = "summary_report.txt";
pub const ERROR_LOG_PATH: &str = "error_log.txt";

pub fn run() -> anyhow::Result<()> {
    run_scenario("inventory", || {
        scenarios::inventory::run(Path::new(INVENTORY_LOG_PATH))
    });
    run_scenario("warehouse", scenarios::warehouse::run);
    run_scenario("finance", scenarios::finance::run);
    run_scenario("health", scenarios::health::run);
    run_scenario("grading", || {
        scenarios::grading::run(
            Path::new(ROSTER_PATH),
            Path::new(REPORT_PATH),
            Path::new(ERROR_LOG_PATH),
        )
    });
    Ok(())
}

fn run_scenario(name: &str, scenario: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(err) = scenario() {
        error!(scenario = name, "scenario failed: {err:#}");
    }
    println!();
}
