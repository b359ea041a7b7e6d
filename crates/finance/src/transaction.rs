use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId};

/// Transaction identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(pub RecordId);

impl TransactionId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Render minor units (cents) as a currency string, e.g. `$120.00`.
pub fn format_minor(amount_minor: i64) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Immutable transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    date: DateTime<Utc>,
    /// Amount in minor units (cents).
    amount_minor: i64,
    category: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        date: DateTime<Utc>,
        amount_minor: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            amount_minor,
            category: category.into(),
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
