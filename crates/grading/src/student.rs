use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId};

/// Student identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudentId(pub RecordId);

impl StudentId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Letter grade with fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Thresholds: >=80 A, >=70 B, >=60 C, >=50 D, else F.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Student roster record. Score is 0-100, validated at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    full_name: String,
    score: u8,
}

impl Student {
    pub fn new(id: StudentId, full_name: impl Into<String>, score: u8) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
