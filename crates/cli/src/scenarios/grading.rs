use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use recordworks_grading::{read_roster, write_error_log, write_report_file, RosterError};

/// Sample roster written when no input file exists, so the scenario has
/// something to chew on. Two lines are deliberately malformed.
const SAMPLE_ROSTER: &str = "\
1, John Doe, 85
2, Jane Roe, 74
3, Sam Low, 150
4, Ada Lovelace, 62
5,Pat
6, Grace Hopper, 91
";

/// Grading: read the roster, divert malformed lines to the error log, and
/// write the summary report. A missing input file is a user-facing message,
/// not a crash.
pub fn run(roster_path: &Path, report_path: &Path, error_log_path: &Path) -> anyhow::Result<()> {
    println!("=== Grading ===");

    if !roster_path.exists() {
        std::fs::write(roster_path, SAMPLE_ROSTER)
            .with_context(|| format!("seeding sample roster at '{}'", roster_path.display()))?;
        info!(path = %roster_path.display(), "seeded sample roster");
    }

    let outcome = match read_roster(roster_path) {
        Ok(outcome) => outcome,
        Err(RosterError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            println!("Error: Input file '{}' not found.", roster_path.display());
            return Ok(());
        }
        Err(err) => return Err(err).context("reading roster"),
    };

    write_error_log(error_log_path, &outcome.errors).context("writing error log")?;
    write_report_file(report_path, &outcome.students).context("writing report")?;

    println!(
        "Report successfully generated at '{}'.",
        report_path.display()
    );
    if !outcome.errors.is_empty() {
        println!(
            "Some errors occurred. See '{}' for details.",
            error_log_path.display()
        );
    }
    Ok(())
}
