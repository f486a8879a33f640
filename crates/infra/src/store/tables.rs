use kitchenpos_core::{OrderTableId, StoreResult};
use kitchenpos_orders::{OrderTable, OrderTableRepository};

use super::EntityMap;

/// In-memory order tables. Seating changes happen out of band; orders only
/// read from here.
#[derive(Debug, Default)]
pub struct InMemoryOrderTableStore {
    tables: EntityMap<OrderTable>,
}

impl InMemoryOrderTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, table: OrderTable) -> StoreResult<()> {
        self.tables.put(table)
    }
}

impl OrderTableRepository for InMemoryOrderTableStore {
    fn find_by_id(&self, id: OrderTableId) -> StoreResult<Option<OrderTable>> {
        self.tables.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_the_table() {
        let store = InMemoryOrderTableStore::new();
        let id = OrderTableId::new(1);

        store.upsert(OrderTable::vacant(id)).unwrap();
        store.upsert(OrderTable::occupied(id, 3)).unwrap();

        let table = store.find_by_id(id).unwrap().unwrap();
        assert!(!table.empty);
        assert_eq!(table.number_of_guests, 3);
        assert!(store.find_by_id(OrderTableId::new(2)).unwrap().is_none());
    }
}
