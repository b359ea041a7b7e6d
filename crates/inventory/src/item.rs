use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId};

/// Inventory item identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub RecordId);

impl ItemId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Immutable captured inventory record.
///
/// Fields are fixed at capture time; corrections are new records, not edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: i64,
    added_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            added_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
