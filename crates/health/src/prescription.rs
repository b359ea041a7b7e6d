use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId};

use crate::patient::PatientId;

/// Prescription identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PrescriptionId(pub RecordId);

impl PrescriptionId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for PrescriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Prescription record, tied to a patient by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: PrescriptionId,
    patient_id: PatientId,
    medication: String,
    issued_at: DateTime<Utc>,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
        medication: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            issued_at,
        }
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn medication(&self) -> &str {
        &self.medication
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl Entity for Prescription {
    type Id = PrescriptionId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Prescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Prescription(Id={}, PatientId={}, Medication={}, Date={})",
            self.id,
            self.patient_id,
            self.medication,
            self.issued_at.format("%Y-%m-%d")
        )
    }
}
