use crate::error::OrderError;
use crate::order::OrderStatus;

/// Status transition rules.
///
/// Only the terminal state is guarded. Any non-completed order may move to any
/// status, including backwards (`MEAL` → `COOKING`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderStatusMachine;

impl OrderStatusMachine {
    /// Fails when an order in `current` can no longer change status.
    pub fn assert_mutable(current: OrderStatus) -> Result<(), OrderError> {
        if current.is_terminal() {
            return Err(OrderError::TerminalOrder);
        }
        Ok(())
    }

    /// Decide the status an order in `current` ends up in when asked to move
    /// to `target`.
    pub fn transition(current: OrderStatus, target: OrderStatus) -> Result<OrderStatus, OrderError> {
        Self::assert_mutable(current)?;
        Ok(target)
    }
}
