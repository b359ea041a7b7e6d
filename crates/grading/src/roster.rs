use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use recordworks_core::Entity;

use crate::student::{Student, StudentId};

/// Roster parsing failure.
///
/// One variant per malformed-record kind, plus `Io` for failures of the
/// file itself. Malformed lines are recoverable; `Io` is not.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Line {line}: Missing fields. Expected 3, got {found}.")]
    MissingField { line: usize, found: usize },

    #[error("Line {line}: One or more fields are empty.")]
    EmptyField { line: usize },

    #[error("Line {line}: Invalid ID format '{value}'.")]
    InvalidId { line: usize, value: String },

    #[error("Line {line}: Invalid score format '{value}'.")]
    InvalidScore { line: usize, value: String },

    #[error("Line {line}: Score {score} is out of valid range (0-100).")]
    ScoreOutOfRange { line: usize, score: i64 },

    #[error("roster i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of parsing a whole roster: the good records and one error per
/// malformed line, in input order.
#[derive(Debug, Default)]
pub struct RosterOutcome {
    pub students: Vec<Student>,
    pub errors: Vec<RosterError>,
}

/// Parse one `id,fullName,score` line. Fields are comma-separated and
/// whitespace-trimmed; surplus fields beyond the third are ignored.
pub fn parse_line(line_number: usize, line: &str) -> Result<Student, RosterError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 3 {
        return Err(RosterError::MissingField {
            line: line_number,
            found: parts.len(),
        });
    }

    let id_raw = parts[0].trim();
    let full_name = parts[1].trim();
    let score_raw = parts[2].trim();

    if id_raw.is_empty() || full_name.is_empty() || score_raw.is_empty() {
        return Err(RosterError::EmptyField { line: line_number });
    }

    let id: u32 = id_raw.parse().map_err(|_| RosterError::InvalidId {
        line: line_number,
        value: id_raw.to_string(),
    })?;

    let score: i64 = score_raw.parse().map_err(|_| RosterError::InvalidScore {
        line: line_number,
        value: score_raw.to_string(),
    })?;
    if !(0..=100).contains(&score) {
        return Err(RosterError::ScoreOutOfRange {
            line: line_number,
            score,
        });
    }

    Ok(Student::new(StudentId::new(id), full_name, score as u8))
}

/// Parse every line of a roster, recovering per line.
///
/// Malformed lines land in `errors` (one entry each) and parsing continues
/// with the next line; only a failure to read the input itself aborts.
pub fn parse_roster<R: BufRead>(reader: R) -> Result<RosterOutcome, RosterError> {
    let mut outcome = RosterOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        match parse_line(line_number, &line) {
            Ok(student) => outcome.students.push(student),
            Err(err) => {
                debug!(line = line_number, %err, "malformed roster line");
                outcome.errors.push(err);
            }
        }
    }

    Ok(outcome)
}

/// Read and parse a roster file.
///
/// A missing or unreadable file is reported as `Io` to the caller; malformed
/// lines inside a readable file are recovered per line.
pub fn read_roster(path: impl AsRef<Path>) -> Result<RosterOutcome, RosterError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let outcome = parse_roster(BufReader::new(file))?;
    info!(
        path = %path.display(),
        parsed = outcome.students.len(),
        rejected = outcome.errors.len(),
        "roster read"
    );
    Ok(outcome)
}

/// Write one message per malformed line. No file is created when there is
/// nothing to report.
pub fn write_error_log(path: impl AsRef<Path>, errors: &[RosterError]) -> std::io::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for err in errors {
        writeln!(writer, "{err}")?;
    }
    writer.flush()
}

/// Write the summary report: `fullName (ID: id): Score = score, Grade = grade`.
pub fn write_report<W: Write>(mut writer: W, students: &[Student]) -> std::io::Result<()> {
    for student in students {
        writeln!(
            writer,
            "{} (ID: {}): Score = {}, Grade = {}",
            student.full_name(),
            student.id(),
            student.score(),
            student.grade()
        )?;
    }
    Ok(())
}

pub fn write_report_file(path: impl AsRef<Path>, students: &[Student]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_report(&mut writer, students)?;
    writer.flush()
}
