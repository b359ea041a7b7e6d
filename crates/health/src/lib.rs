//! Patient and prescription records.

pub mod patient;
pub mod prescription;
pub mod records;

pub use patient::{Patient, PatientId};
pub use prescription::{Prescription, PrescriptionId};
pub use records::HealthRecords;
