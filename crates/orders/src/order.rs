use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kitchenpos_core::{
    AggregateRoot, Entity, MenuId, OrderId, OrderLineItemSeq, OrderTableId, Quantity,
};

/// Order status lifecycle: `COOKING` → `MEAL` → `COMPLETION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Cooking, OrderStatus::Meal, OrderStatus::Completion];

    /// `COMPLETION` accepts no further status changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One menu item and its quantity on a persisted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub seq: OrderLineItemSeq,
    pub order_id: OrderId,
    pub menu_id: MenuId,
    pub quantity: Quantity,
}

impl Entity for OrderLineItem {
    type Id = OrderLineItemSeq;

    fn id(&self) -> &Self::Id {
        &self.seq
    }
}

/// Line item bound to a persisted order but not yet persisted itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLineItem {
    pub order_id: OrderId,
    pub menu_id: MenuId,
    pub quantity: Quantity,
}

/// Aggregate root: Order.
///
/// Line items are stored separately and attached by the service; an `Order`
/// fresh out of the order store carries an empty `order_line_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_table_id: OrderTableId,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
    pub order_line_items: Vec<OrderLineItem>,
    pub version: u64,
}

impl Order {
    pub fn with_line_items(mut self, order_line_items: Vec<OrderLineItem>) -> Self {
        self.order_line_items = order_line_items;
        self
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Order shell handed to the order store on creation (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_table_id: OrderTableId,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
}

/// Command: place a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    pub order_table_id: OrderTableId,
    pub order_line_items: Vec<CreateOrderLineItem>,
}

/// One requested line of a [`CreateOrder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderLineItem {
    pub menu_id: MenuId,
    pub quantity: Quantity,
}

/// Command: move an order to another status.
///
/// Only the target status is carried; nothing else about the order can be
/// changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeOrderStatus {
    pub order_status: OrderStatus,
}
