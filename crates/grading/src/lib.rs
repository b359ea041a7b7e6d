//! Student grading module.
//!
//! Student records with fixed grade thresholds, a line-oriented roster
//! parser that recovers per line, and the summary report writer.

pub mod roster;
pub mod student;

pub use roster::{
    parse_line, parse_roster, read_roster, write_error_log, write_report, write_report_file,
    RosterError, RosterOutcome,
};
pub use student::{Grade, Student, StudentId};
