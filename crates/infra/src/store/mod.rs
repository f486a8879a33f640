//! In-memory stores for tests/dev.
//!
//! Each store is process-wide shared state: an [`EntityMap`] keyed by
//! [`Entity::id`] behind an `RwLock`. Ids are handed out by a per-store
//! [`Sequence`] starting at 1, so listing a store in id order is listing it in
//! insertion order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use kitchenpos_core::{AggregateRoot, Entity, ExpectedVersion, StoreError, StoreResult};

pub mod line_items;
pub mod menus;
pub mod orders;
pub mod tables;

pub use line_items::InMemoryOrderLineItemStore;
pub use menus::{InMemoryMenuGroupStore, InMemoryMenuStore};
pub use orders::InMemoryOrderStore;
pub use tables::InMemoryOrderTableStore;

/// Monotonic id generator.
#[derive(Debug)]
pub struct Sequence {
    next: AtomicU64,
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::backend("lock poisoned")
}

/// Entities keyed and ordered by their id.
#[derive(Debug)]
pub struct EntityMap<E: Entity> {
    rows: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Entity> Default for EntityMap<E> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E> EntityMap<E>
where
    E: Entity + Clone,
{
    /// Insert or overwrite the row with the entity's id.
    pub fn put(&self, entity: E) -> StoreResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(*entity.id(), entity);
        Ok(())
    }

    pub fn get(&self, id: &E::Id) -> StoreResult<Option<E>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.get(id).cloned())
    }

    /// How many entries of `ids` are present, counting repeats.
    pub fn count_present(&self, ids: &[E::Id]) -> StoreResult<usize> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(ids.iter().filter(|id| rows.contains_key(*id)).count())
    }

    /// All rows matching `keep`, in id order.
    pub fn filter(&self, keep: impl Fn(&E) -> bool) -> StoreResult<Vec<E>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.values().filter(|e| keep(e)).cloned().collect())
    }

    pub fn all(&self) -> StoreResult<Vec<E>> {
        self.filter(|_| true)
    }
}

impl<E> EntityMap<E>
where
    E: AggregateRoot + Clone,
{
    /// Overwrite an existing aggregate if it is still at `expected`.
    pub fn replace(&self, expected: ExpectedVersion, next: E) -> StoreResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let stored = rows
            .get_mut(next.id())
            .ok_or_else(|| StoreError::Missing(format!("id {}", next.id())))?;
        expected.check(stored.version())?;
        *stored = next;
        Ok(())
    }
}

/// Every collaborator store, shareable between services.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub menus: Arc<InMemoryMenuStore>,
    pub menu_groups: Arc<InMemoryMenuGroupStore>,
    pub tables: Arc<InMemoryOrderTableStore>,
    pub orders: Arc<InMemoryOrderStore>,
    pub line_items: Arc<InMemoryOrderLineItemStore>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        version: u64,
    }

    impl Entity for Row {
        type Id = u64;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl AggregateRoot for Row {
        fn version(&self) -> u64 {
            self.version
        }
    }

    #[test]
    fn entity_map_keys_rows_by_id() {
        let map = EntityMap::default();
        map.put(Row { id: 2, version: 1 }).unwrap();
        map.put(Row { id: 1, version: 1 }).unwrap();
        map.put(Row { id: 2, version: 5 }).unwrap();

        assert_eq!(map.all().unwrap().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(map.get(&2).unwrap().unwrap().version, 5);
        assert_eq!(map.count_present(&[1, 1, 3]).unwrap(), 2);
    }

    #[test]
    fn replace_checks_the_stored_version() {
        let map = EntityMap::default();
        map.put(Row { id: 1, version: 2 }).unwrap();

        assert!(matches!(
            map.replace(ExpectedVersion(1), Row { id: 1, version: 9 }),
            Err(StoreError::Concurrency(_))
        ));
        assert!(matches!(
            map.replace(ExpectedVersion(1), Row { id: 7, version: 2 }),
            Err(StoreError::Missing(_))
        ));

        map.replace(ExpectedVersion(2), Row { id: 1, version: 3 }).unwrap();
        assert_eq!(map.get(&1).unwrap().unwrap().version, 3);
    }

    #[test]
    fn sequence_starts_at_one() {
        let seq = Sequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
    }
}
