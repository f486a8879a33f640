use serde::Deserialize;

use kitchenpos_core::{DomainResult, MenuId, OrderTableId, Quantity};
use kitchenpos_menus::NewMenuGroup;
use kitchenpos_orders::{ChangeOrderStatus, CreateOrder, CreateOrderLineItem, OrderStatus};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_table_id: u64,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemRequest {
    pub menu_id: u64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRequest {
    pub order_status: OrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct MenuGroupRequest {
    pub name: String,
}

// -------------------------
// Mapping to domain commands
// -------------------------

impl OrderRequest {
    pub fn into_command(self) -> DomainResult<CreateOrder> {
        let order_line_items = self
            .order_line_items
            .into_iter()
            .map(|item| {
                Ok(CreateOrderLineItem {
                    menu_id: MenuId::new(item.menu_id),
                    quantity: Quantity::new(item.quantity)?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(CreateOrder {
            order_table_id: OrderTableId::new(self.order_table_id),
            order_line_items,
        })
    }
}

impl From<OrderStatusRequest> for ChangeOrderStatus {
    fn from(value: OrderStatusRequest) -> Self {
        ChangeOrderStatus {
            order_status: value.order_status,
        }
    }
}

impl From<MenuGroupRequest> for NewMenuGroup {
    fn from(value: MenuGroupRequest) -> Self {
        NewMenuGroup { name: value.name }
    }
}
