//! Orders domain module.
//!
//! Business rules for admitting orders and moving them through their status
//! lifecycle. Persistence is reached only through the collaborator traits in
//! [`repository`]; nothing here performs IO directly.

pub mod error;
pub mod order;
pub mod repository;
pub mod service;
pub mod status;
pub mod table;
pub mod validator;

#[cfg(test)]
mod fakes;

pub use error::{InvalidOrderReason, OrderError};
pub use order::{
    ChangeOrderStatus, CreateOrder, CreateOrderLineItem, NewOrder, NewOrderLineItem, Order,
    OrderLineItem, OrderStatus,
};
pub use repository::{MenuCatalog, OrderLineItemRepository, OrderRepository, OrderTableRepository};
pub use service::OrderService;
pub use status::OrderStatusMachine;
pub use table::OrderTable;
pub use validator::OrderValidator;
