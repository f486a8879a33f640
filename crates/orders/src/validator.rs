use kitchenpos_core::MenuId;

use crate::error::{InvalidOrderReason, OrderError};
use crate::order::CreateOrder;
use crate::repository::{MenuCatalog, OrderTableRepository};
use crate::table::OrderTable;

/// Admission checks for a new order. Reads collaborators, never writes.
#[derive(Debug)]
pub struct OrderValidator<'a, M, T> {
    menus: &'a M,
    tables: &'a T,
}

impl<'a, M, T> OrderValidator<'a, M, T>
where
    M: MenuCatalog,
    T: OrderTableRepository,
{
    pub fn new(menus: &'a M, tables: &'a T) -> Self {
        Self { menus, tables }
    }

    /// Check, in order: line items present, every referenced menu exists, the
    /// table exists, the table is seated. Returns the table on success.
    ///
    /// Menu existence compares the per-occurrence existence count with the
    /// number of line items, so an order listing the same existing menu twice
    /// passes.
    pub fn validate_for_creation(&self, candidate: &CreateOrder) -> Result<OrderTable, OrderError> {
        if candidate.order_line_items.is_empty() {
            return Err(InvalidOrderReason::EmptyLineItems.into());
        }

        let menu_ids: Vec<MenuId> = candidate
            .order_line_items
            .iter()
            .map(|item| item.menu_id)
            .collect();
        if self.menus.count_by_id_in(&menu_ids)? != menu_ids.len() {
            return Err(InvalidOrderReason::UnknownMenu.into());
        }

        let table = self
            .tables
            .find_by_id(candidate.order_table_id)?
            .ok_or(InvalidOrderReason::UnknownTable)?;
        if table.empty {
            return Err(InvalidOrderReason::EmptyTable.into());
        }

        Ok(table)
    }
}
