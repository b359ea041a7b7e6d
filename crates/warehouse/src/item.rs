use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordworks_core::{Entity, RecordId, StockLevel};

/// Warehouse stock identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StockId(pub RecordId);

impl StockId {
    pub const fn new(id: u32) -> Self {
        Self(RecordId::new(id))
    }
}

impl core::fmt::Display for StockId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Capability shared by everything the warehouse shelves: identity, a
/// display name, and a mutable stock level.
pub trait StockItem: Entity<Id = StockId> + StockLevel {
    fn name(&self) -> &str;
}

/// Electronic stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: StockId,
    name: String,
    quantity: i64,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: StockId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = StockId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl StockLevel for ElectronicItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl StockItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Electronic] Id: {}, Name: {}, Quantity: {}, Brand: {}, WarrantyMonths: {}",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

/// Grocery stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: StockId,
    name: String,
    quantity: i64,
    expires_on: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: StockId, name: impl Into<String>, quantity: i64, expires_on: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expires_on,
        }
    }

    pub fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }
}

impl Entity for GroceryItem {
    type Id = StockId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl StockLevel for GroceryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl StockItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Grocery] Id: {}, Name: {}, Quantity: {}, ExpiryDate: {}",
            self.id,
            self.name,
            self.quantity,
            self.expires_on.format("%Y-%m-%d")
        )
    }
}
