//! Recording collaborator fakes for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use kitchenpos_core::{
    ExpectedVersion, MenuId, OrderId, OrderLineItemSeq, OrderTableId, StoreError, StoreResult,
};

use crate::order::{NewOrder, NewOrderLineItem, Order, OrderLineItem};
use crate::repository::{MenuCatalog, OrderLineItemRepository, OrderRepository, OrderTableRepository};
use crate::table::OrderTable;

#[derive(Default)]
pub struct FakeMenus {
    existing: HashSet<MenuId>,
    pub queries: Mutex<Vec<Vec<MenuId>>>,
}

impl FakeMenus {
    pub fn with(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            existing: ids.into_iter().map(MenuId::new).collect(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl MenuCatalog for FakeMenus {
    fn count_by_id_in(&self, ids: &[MenuId]) -> StoreResult<usize> {
        self.queries.lock().unwrap().push(ids.to_vec());
        Ok(ids.iter().filter(|id| self.existing.contains(*id)).count())
    }
}

#[derive(Default)]
pub struct FakeTables {
    tables: HashMap<OrderTableId, OrderTable>,
    pub lookups: Mutex<usize>,
}

impl FakeTables {
    pub fn with(tables: impl IntoIterator<Item = OrderTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.id, t)).collect(),
            lookups: Mutex::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl OrderTableRepository for FakeTables {
    fn find_by_id(&self, id: OrderTableId) -> StoreResult<Option<OrderTable>> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self.tables.get(&id).cloned())
    }
}

#[derive(Default)]
pub struct FakeOrders {
    pub rows: Mutex<Vec<Order>>,
    pub inserts: Mutex<usize>,
    pub updates: Mutex<usize>,
}

impl FakeOrders {
    pub fn with(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            rows: Mutex::new(orders.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn insert_count(&self) -> usize {
        *self.inserts.lock().unwrap()
    }

    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

impl OrderRepository for FakeOrders {
    fn insert(&self, order: NewOrder) -> StoreResult<Order> {
        *self.inserts.lock().unwrap() += 1;
        let mut rows = self.rows.lock().unwrap();
        let saved = Order {
            id: OrderId::new(rows.len() as u64 + 1),
            order_table_id: order.order_table_id,
            order_status: order.order_status,
            ordered_time: order.ordered_time,
            order_line_items: Vec::new(),
            version: 1,
        };
        rows.push(saved.clone());
        Ok(saved)
    }

    fn update(&self, mut order: Order) -> StoreResult<Order> {
        *self.updates.lock().unwrap() += 1;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or_else(|| StoreError::Missing(order.id.to_string()))?;
        ExpectedVersion::of(&order).check(row.version)?;
        order.version += 1;
        order.order_line_items.clear();
        *row = order.clone();
        Ok(order)
    }

    fn find_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        Ok(self.rows.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct FakeLineItems {
    pub rows: Mutex<Vec<OrderLineItem>>,
    pub lookups: Mutex<Vec<OrderId>>,
    /// Fail the insert once this many rows exist.
    pub fail_at: Option<usize>,
}

impl FakeLineItems {
    pub fn with(items: impl IntoIterator<Item = OrderLineItem>) -> Self {
        Self {
            rows: Mutex::new(items.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn failing_at(count: usize) -> Self {
        Self {
            fail_at: Some(count),
            ..Self::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl OrderLineItemRepository for FakeLineItems {
    fn insert(&self, item: NewOrderLineItem) -> StoreResult<OrderLineItem> {
        let mut rows = self.rows.lock().unwrap();
        if self.fail_at == Some(rows.len()) {
            return Err(StoreError::backend("line item write failed"));
        }
        let saved = OrderLineItem {
            seq: OrderLineItemSeq::new(rows.len() as u64 + 1),
            order_id: item.order_id,
            menu_id: item.menu_id,
            quantity: item.quantity,
        };
        rows.push(saved.clone());
        Ok(saved)
    }

    fn find_all_by_order_id(&self, order_id: OrderId) -> StoreResult<Vec<OrderLineItem>> {
        self.lookups.lock().unwrap().push(order_id);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }
}
