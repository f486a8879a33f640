use kitchenpos_core::{ExpectedVersion, OrderId, StoreResult};
use kitchenpos_orders::{NewOrder, Order, OrderRepository};

use super::{EntityMap, Sequence};

/// In-memory order store with optimistic concurrency on update.
///
/// Orders are stored without their line items; those live in
/// [`super::InMemoryOrderLineItemStore`].
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: EntityMap<Order>,
    ids: Sequence,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderStore {
    fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        let saved = Order {
            id: OrderId::new(self.ids.next()),
            order_table_id: order.order_table_id,
            order_status: order.order_status,
            ordered_time: order.ordered_time,
            order_line_items: Vec::new(),
            version: 1,
        };
        self.orders.put(saved.clone())?;
        Ok(saved)
    }

    fn update(&self, mut order: Order) -> StoreResult<Order> {
        // Compare-and-set on the version read by the caller.
        let expected = ExpectedVersion::of(&order);
        order.version += 1;
        order.order_line_items.clear();
        self.orders.replace(expected, order.clone())?;
        Ok(order)
    }

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        self.orders.get(&id)
    }

    fn find_all(&self) -> StoreResult<Vec<Order>> {
        self.orders.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kitchenpos_core::{OrderTableId, StoreError};
    use kitchenpos_orders::OrderStatus;

    fn shell() -> NewOrder {
        NewOrder {
            order_table_id: OrderTableId::new(1),
            order_status: OrderStatus::Cooking,
            ordered_time: Utc::now(),
        }
    }

    #[test]
    fn insert_assigns_ids_in_order() {
        let store = InMemoryOrderStore::new();
        let a = store.insert(shell()).unwrap();
        let b = store.insert(shell()).unwrap();

        assert_eq!(a.id, OrderId::new(1));
        assert_eq!(b.id, OrderId::new(2));
        assert_eq!(a.version, 1);
        assert_eq!(
            store.find_all().unwrap().iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }

    #[test]
    fn update_bumps_version() {
        let store = InMemoryOrderStore::new();
        let mut order = store.insert(shell()).unwrap();
        order.order_status = OrderStatus::Meal;

        let updated = store.update(order).unwrap();

        assert_eq!(updated.version, 2);
        let reloaded = store.find_by_id(updated.id).unwrap().unwrap();
        assert_eq!(reloaded.order_status, OrderStatus::Meal);
        assert_eq!(reloaded.version, 2);
    }

    #[test]
    fn stale_update_is_rejected() {
        let store = InMemoryOrderStore::new();
        let original = store.insert(shell()).unwrap();

        let mut first = original.clone();
        first.order_status = OrderStatus::Meal;
        store.update(first).unwrap();

        let mut second = original;
        second.order_status = OrderStatus::Completion;
        let err = store.update(second).unwrap_err();

        assert!(matches!(err, StoreError::Concurrency(_)));
        let reloaded = store.find_by_id(OrderId::new(1)).unwrap().unwrap();
        assert_eq!(reloaded.order_status, OrderStatus::Meal);
    }

    #[test]
    fn update_of_unknown_order_fails() {
        let store = InMemoryOrderStore::new();
        let mut order = store.insert(shell()).unwrap();
        order.id = OrderId::new(42);

        assert!(matches!(store.update(order), Err(StoreError::Missing(_))));
    }
}
