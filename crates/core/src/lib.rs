//! `kitchenpos-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, error types, the entity/aggregate traits the stores key and
//! version records by, and validated value objects.

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{AggregateRoot, Entity, ExpectedVersion};
pub use error::{DomainError, DomainResult, StoreError, StoreResult};
pub use id::{MenuGroupId, MenuId, OrderId, OrderLineItemSeq, OrderTableId, TableGroupId};
pub use value_object::Quantity;
