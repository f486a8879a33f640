//! Persistence collaborators consumed by the order service.
//!
//! Implementations own the data and its transaction semantics. Each call is
//! expected to be atomic on its own; the service never caches what it reads.

use std::sync::Arc;

use kitchenpos_core::{MenuId, OrderId, OrderTableId, StoreResult};

use crate::order::{NewOrder, NewOrderLineItem, Order, OrderLineItem};
use crate::table::OrderTable;

/// Menu existence lookup.
pub trait MenuCatalog: Send + Sync {
    /// How many entries of `ids` name an existing menu.
    ///
    /// Counted per occurrence: `[1, 1]` with menu 1 present yields 2.
    fn count_by_id_in(&self, ids: &[MenuId]) -> StoreResult<usize>;
}

/// Order table lookup.
pub trait OrderTableRepository: Send + Sync {
    fn find_by_id(&self, id: OrderTableId) -> StoreResult<Option<OrderTable>>;
}

/// Order persistence.
pub trait OrderRepository: Send + Sync {
    /// Persist a new order shell and assign its id (version 1).
    fn insert(&self, order: NewOrder) -> StoreResult<Order>;

    /// Overwrite a persisted order.
    ///
    /// Must fail with `StoreError::Concurrency` when `order.version` is not the
    /// stored version. Returns the order with its bumped version.
    fn update(&self, order: Order) -> StoreResult<Order>;

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>>;

    /// All orders, in persistence order.
    fn find_all(&self) -> StoreResult<Vec<Order>>;
}

/// Order line item persistence.
pub trait OrderLineItemRepository: Send + Sync {
    /// Persist a line item and assign its seq.
    fn insert(&self, item: NewOrderLineItem) -> StoreResult<OrderLineItem>;

    fn find_all_by_order_id(&self, order_id: OrderId) -> StoreResult<Vec<OrderLineItem>>;
}

impl<S> MenuCatalog for Arc<S>
where
    S: MenuCatalog + ?Sized,
{
    fn count_by_id_in(&self, ids: &[MenuId]) -> StoreResult<usize> {
        (**self).count_by_id_in(ids)
    }
}

impl<S> OrderTableRepository for Arc<S>
where
    S: OrderTableRepository + ?Sized,
{
    fn find_by_id(&self, id: OrderTableId) -> StoreResult<Option<OrderTable>> {
        (**self).find_by_id(id)
    }
}

impl<S> OrderRepository for Arc<S>
where
    S: OrderRepository + ?Sized,
{
    fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        (**self).insert(order)
    }

    fn update(&self, order: Order) -> StoreResult<Order> {
        (**self).update(order)
    }

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> StoreResult<Vec<Order>> {
        (**self).find_all()
    }
}

impl<S> OrderLineItemRepository for Arc<S>
where
    S: OrderLineItemRepository + ?Sized,
{
    fn insert(&self, item: NewOrderLineItem) -> StoreResult<OrderLineItem> {
        (**self).insert(item)
    }

    fn find_all_by_order_id(&self, order_id: OrderId) -> StoreResult<Vec<OrderLineItem>> {
        (**self).find_all_by_order_id(order_id)
    }
}
