//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Ord + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Capability: an entity carrying a mutable stock quantity.
///
/// Quantity is `i64`; callers validate sign before writing (the repository
/// rejects negative values with `StoreError::InvalidValue`).
pub trait StockLevel {
    fn quantity(&self) -> i64;

    fn set_quantity(&mut self, quantity: i64);
}
