use chrono::{Days, NaiveDate};

use recordworks_core::{StoreError, StoreResult};
use recordworks_store::Repository;

use crate::item::{ElectronicItem, GroceryItem, StockId, StockItem};

/// Top up the stock of `id` by `amount`.
///
/// A non-positive increase is rejected with `InvalidValue`; the stored
/// quantity only moves through `update_quantity`, so an absent id fails
/// with `NotFound`. Returns the new quantity.
pub fn increase_stock<T: StockItem>(
    repo: &mut Repository<T>,
    id: StockId,
    amount: i64,
) -> StoreResult<i64> {
    if amount <= 0 {
        return Err(StoreError::invalid_value(format!(
            "stock increase must be positive (got {amount})"
        )));
    }
    let new_quantity = repo.get(id)?.quantity() + amount;
    repo.update_quantity(id, new_quantity)?;
    Ok(new_quantity)
}

/// The stockroom: electronics and groceries, each in its own keyed catalog.
#[derive(Debug, Default)]
pub struct Warehouse {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the demo catalogs. `today` anchors the grocery expiry dates;
    /// pass it explicitly so tests stay deterministic.
    pub fn seed(&mut self, today: NaiveDate) -> StoreResult<()> {
        self.electronics
            .add(ElectronicItem::new(StockId::new(1), "Smartphone", 50, "BrandA", 24))?;
        self.electronics
            .add(ElectronicItem::new(StockId::new(2), "Laptop", 30, "BrandB", 36))?;
        self.electronics
            .add(ElectronicItem::new(StockId::new(3), "Headphones", 150, "BrandC", 12))?;

        self.groceries.add(GroceryItem::new(
            StockId::new(101),
            "Milk",
            200,
            today + Days::new(7),
        ))?;
        self.groceries.add(GroceryItem::new(
            StockId::new(102),
            "Bread",
            100,
            today + Days::new(3),
        ))?;
        self.groceries.add(GroceryItem::new(
            StockId::new(103),
            "Eggs",
            300,
            today + Days::new(14),
        ))?;

        Ok(())
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }
}
