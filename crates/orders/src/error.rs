//! Order error model.

use thiserror::Error;

use kitchenpos_core::{OrderId, StoreError};

/// Why a candidate order was refused admission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOrderReason {
    #[error("empty line items")]
    EmptyLineItems,

    #[error("unknown menu")]
    UnknownMenu,

    #[error("unknown table")]
    UnknownTable,

    #[error("table is empty")]
    EmptyTable,
}

/// Failures surfaced by order operations. None of them are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A creation precondition failed.
    #[error("{0}")]
    InvalidOrder(#[from] InvalidOrderReason),

    /// Status change attempted on a completed order.
    #[error("already completed")]
    TerminalOrder,

    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// The order changed between load and update.
    #[error("order was modified concurrently: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for OrderError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Concurrency(msg) => OrderError::Conflict(msg),
            other => OrderError::Store(other),
        }
    }
}
