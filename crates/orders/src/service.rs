//! Order application service.
//!
//! ```text
//! create:               validate → insert order shell → insert each line item
//! change_order_status:  load → assert mutable → set status → update → attach items
//! list:                 load all → attach items per order
//! ```
//!
//! The line-item inserts of `create` depend on the id assigned to the order
//! shell, so the shell is always written first. Atomicity of the whole
//! create is the store's responsibility; a failed line-item write is
//! returned as-is and nothing is rolled back here.

use chrono::Utc;

use kitchenpos_core::OrderId;

use crate::error::OrderError;
use crate::order::{ChangeOrderStatus, CreateOrder, NewOrder, NewOrderLineItem, Order, OrderStatus};
use crate::repository::{MenuCatalog, OrderLineItemRepository, OrderRepository, OrderTableRepository};
use crate::status::OrderStatusMachine;
use crate::validator::OrderValidator;

/// Orchestrates order admission and status changes over the persistence
/// collaborators.
///
/// - `M`: menu existence lookup
/// - `T`: order table lookup
/// - `O`: order store
/// - `L`: order line item store
#[derive(Debug)]
pub struct OrderService<M, T, O, L> {
    menus: M,
    tables: T,
    orders: O,
    line_items: L,
}

impl<M, T, O, L> OrderService<M, T, O, L> {
    pub fn new(menus: M, tables: T, orders: O, line_items: L) -> Self {
        Self {
            menus,
            tables,
            orders,
            line_items,
        }
    }
}

impl<M, T, O, L> OrderService<M, T, O, L>
where
    M: MenuCatalog,
    T: OrderTableRepository,
    O: OrderRepository,
    L: OrderLineItemRepository,
{
    /// Admit a new order. It starts in `COOKING`, stamped with the current time.
    pub fn create(&self, candidate: CreateOrder) -> Result<Order, OrderError> {
        let table = OrderValidator::new(&self.menus, &self.tables)
            .validate_for_creation(&candidate)
            .inspect_err(|e| {
                tracing::warn!(order_table_id = %candidate.order_table_id, "order rejected: {e}");
            })?;

        let order = self.orders.insert(NewOrder {
            order_table_id: table.id,
            order_status: OrderStatus::Cooking,
            ordered_time: Utc::now(),
        })?;

        let mut saved_items = Vec::with_capacity(candidate.order_line_items.len());
        for item in candidate.order_line_items {
            let saved = self.line_items.insert(NewOrderLineItem {
                order_id: order.id,
                menu_id: item.menu_id,
                quantity: item.quantity,
            })?;
            saved_items.push(saved);
        }

        tracing::info!(
            order_id = %order.id,
            order_table_id = %order.order_table_id,
            line_items = saved_items.len(),
            "order created"
        );

        Ok(order.with_line_items(saved_items))
    }

    /// Every order with its line items, in store order.
    pub fn list(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.find_all()?;
        tracing::debug!(count = orders.len(), "listing orders");

        orders
            .into_iter()
            .map(|order| {
                let items = self.line_items.find_all_by_order_id(order.id)?;
                Ok(order.with_line_items(items))
            })
            .collect()
    }

    /// Move an order to `update.order_status`.
    ///
    /// The order is always reloaded; the update is version-checked so a
    /// concurrent change surfaces as [`OrderError::Conflict`].
    pub fn change_order_status(
        &self,
        order_id: OrderId,
        update: ChangeOrderStatus,
    ) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_by_id(order_id)?
            .ok_or(OrderError::NotFound(order_id))?;

        let from = order.order_status;
        order.order_status = OrderStatusMachine::transition(from, update.order_status)
            .inspect_err(|e| {
                tracing::warn!(order_id = %order_id, status = %from, "status change rejected: {e}");
            })?;

        let order = self.orders.update(order)?;
        let items = self.line_items.find_all_by_order_id(order_id)?;

        tracing::info!(
            order_id = %order_id,
            from = %from,
            to = %order.order_status,
            "order status changed"
        );

        Ok(order.with_line_items(items))
    }
}
