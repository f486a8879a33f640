use kitchenpos_core::{OrderId, OrderLineItemSeq, StoreResult};
use kitchenpos_orders::{NewOrderLineItem, OrderLineItem, OrderLineItemRepository};

use super::{EntityMap, Sequence};

/// In-memory line items, keyed by seq (so in insertion order).
#[derive(Debug, Default)]
pub struct InMemoryOrderLineItemStore {
    items: EntityMap<OrderLineItem>,
    seqs: Sequence,
}

impl InMemoryOrderLineItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderLineItemRepository for InMemoryOrderLineItemStore {
    fn insert(&self, item: NewOrderLineItem) -> StoreResult<OrderLineItem> {
        let saved = OrderLineItem {
            seq: OrderLineItemSeq::new(self.seqs.next()),
            order_id: item.order_id,
            menu_id: item.menu_id,
            quantity: item.quantity,
        };
        self.items.put(saved.clone())?;
        Ok(saved)
    }

    fn find_all_by_order_id(&self, order_id: OrderId) -> StoreResult<Vec<OrderLineItem>> {
        self.items.filter(|item| item.order_id == order_id)
    }
}
