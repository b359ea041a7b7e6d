//! Warehouse stock management module.
//!
//! Two stock catalogs (electronics, groceries) over the generic keyed
//! repository, plus the manager operations the stockroom runs day to day.

pub mod item;
pub mod manager;

pub use item::{ElectronicItem, GroceryItem, StockId, StockItem};
pub use manager::{increase_stock, Warehouse};
