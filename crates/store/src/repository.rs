use std::collections::HashMap;

use recordworks_core::{Entity, StockLevel, StoreError, StoreResult};

/// In-memory keyed store of entities.
///
/// At most one entity per identifier at any time. The repository never
/// creates or destroys identifiers; entities are built by the caller,
/// inserted once, optionally mutated in place, and removed explicitly.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: HashMap<T::Id, T>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Insert an entity under its own identifier.
    ///
    /// Fails with `DuplicateKey` if the identifier is already present; the
    /// store is left unchanged in that case.
    pub fn add(&mut self, entity: T) -> StoreResult<()> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            return Err(StoreError::duplicate_key(id));
        }
        self.items.insert(id, entity);
        Ok(())
    }

    /// Look up an entity by identifier.
    pub fn get(&self, id: T::Id) -> StoreResult<&T> {
        self.items.get(&id).ok_or_else(|| StoreError::not_found(id))
    }

    /// Remove and return the entity stored under `id`.
    pub fn remove(&mut self, id: T::Id) -> StoreResult<T> {
        self.items.remove(&id).ok_or_else(|| StoreError::not_found(id))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity + Clone> Repository<T> {
    /// Independent copy of all stored entities, sorted by identifier.
    ///
    /// Mutating the returned vector does not affect the store. The sort is
    /// a display convenience only; key order is not load-bearing.
    pub fn snapshot(&self) -> Vec<T> {
        let mut all: Vec<T> = self.items.values().cloned().collect();
        all.sort_by_key(|e| e.id());
        all
    }
}

impl<T: Entity + StockLevel> Repository<T> {
    /// Overwrite the stored quantity of `id` in place.
    ///
    /// A negative quantity is rejected with `InvalidValue` before the
    /// presence check; an absent identifier fails with `NotFound`. On
    /// failure the stored quantity is untouched.
    pub fn update_quantity(&mut self, id: T::Id, new_quantity: i64) -> StoreResult<()> {
        if new_quantity < 0 {
            return Err(StoreError::invalid_value(format!(
                "quantity cannot be negative (got {new_quantity})"
            )));
        }
        let entity = self
            .items
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(id))?;
        entity.set_quantity(new_quantity);
        Ok(())
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use recordworks_core::RecordId;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Widget {
        id: RecordId,
        name: String,
        quantity: i64,
    }

    impl Widget {
        fn new(id: u32, name: &str, quantity: i64) -> Self {
            Self {
                id: RecordId::new(id),
                name: name.to_string(),
                quantity,
            }
        }
    }

    impl Entity for Widget {
        type Id = RecordId;

        fn id(&self) -> Self::Id {
            self.id
        }
    }

    impl StockLevel for Widget {
        fn quantity(&self) -> i64 {
            self.quantity
        }

        fn set_quantity(&mut self, quantity: i64) {
            self.quantity = quantity;
        }
    }

    #[test]
    fn add_then_get_returns_the_entity() {
        let mut repo = Repository::new();
        let widget = Widget::new(1, "bolt", 10);
        repo.add(widget.clone()).unwrap();

        assert_eq!(repo.get(RecordId::new(1)).unwrap(), &widget);
    }

    #[test]
    fn duplicate_add_is_rejected_and_leaves_store_unchanged() {
        let mut repo = Repository::new();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        let err = repo.add(Widget::new(1, "nut", 99)).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(RecordId::new(1)).unwrap().name, "bolt");
    }

    #[test]
    fn remove_absent_id_reports_not_found() {
        let mut repo: Repository<Widget> = Repository::new();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        let err = repo.remove(RecordId::new(999)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn removed_entity_is_gone() {
        let mut repo = Repository::new();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        let removed = repo.remove(RecordId::new(1)).unwrap();
        assert_eq!(removed.name, "bolt");
        assert!(matches!(
            repo.get(RecordId::new(1)),
            Err(StoreError::NotFound(_))
        ));
        assert!(repo.is_empty());
    }

    #[test]
    fn negative_quantity_update_is_rejected_and_stock_untouched() {
        let mut repo = Repository::new();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        let err = repo.update_quantity(RecordId::new(1), -1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue(_)));
        assert_eq!(repo.get(RecordId::new(1)).unwrap().quantity(), 10);
    }

    #[test]
    fn negative_quantity_beats_not_found() {
        // The value check runs before the presence check.
        let mut repo: Repository<Widget> = Repository::new();
        let err = repo.update_quantity(RecordId::new(404), -5).unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue(_)));
    }

    #[test]
    fn update_quantity_overwrites_in_place() {
        let mut repo = Repository::new();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        repo.update_quantity(RecordId::new(1), 25).unwrap();
        assert_eq!(repo.get(RecordId::new(1)).unwrap().quantity(), 25);

        let err = repo.update_quantity(RecordId::new(2), 5).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let mut repo = Repository::new();
        repo.add(Widget::new(2, "nut", 5)).unwrap();
        repo.add(Widget::new(1, "bolt", 10)).unwrap();

        let mut snap = repo.snapshot();
        assert_eq!(snap.len(), 2);
        // Sorted by id for stable listings.
        assert_eq!(snap[0].id(), RecordId::new(1));

        snap.clear();
        assert_eq!(repo.len(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a batch of unique ids all insert and all read back.
        #[test]
        fn unique_batches_insert_and_read_back(
            ids in prop::collection::hash_set(0u32..10_000, 1..50)
        ) {
            let mut repo = Repository::new();
            for &id in &ids {
                repo.add(Widget::new(id, "w", i64::from(id))).unwrap();
            }

            prop_assert_eq!(repo.len(), ids.len());
            for &id in &ids {
                let found = repo.get(RecordId::new(id)).unwrap();
                prop_assert_eq!(found.id(), RecordId::new(id));
            }
        }

        /// Property: re-adding any already-stored id never changes the size
        /// or the stored entity.
        #[test]
        fn duplicate_insert_never_changes_the_store(
            ids in prop::collection::vec(0u32..100, 1..50)
        ) {
            let mut repo = Repository::new();
            let mut inserted = 0usize;
            for &id in &ids {
                match repo.add(Widget::new(id, "first", 1)) {
                    Ok(()) => inserted += 1,
                    Err(StoreError::DuplicateKey(_)) => {
                        prop_assert_eq!(repo.get(RecordId::new(id)).unwrap().name.as_str(), "first");
                    }
                    Err(other) => return Err(TestCaseError::fail(format!("unexpected: {other}"))),
                }
                prop_assert_eq!(repo.len(), inserted);
            }
        }
    }
}
