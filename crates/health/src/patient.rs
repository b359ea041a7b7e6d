use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId};

/// Patient identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PatientId(pub RecordId);

impl PatientId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for PatientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Patient record. Gender is free-form text, as captured at intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
    gender: String,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Patient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Patient(Id={}, Name={}, Age={}, Gender={})",
            self.id, self.name, self.age, self.gender
        )
    }
}
