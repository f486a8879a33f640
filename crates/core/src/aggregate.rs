//! Identity and versioning traits for persisted domain records.

use crate::error::{StoreError, StoreResult};

/// Anything with a persistence-assigned identity.
///
/// Two entities with the same id are the same record, even if one of them is a
/// stale copy. Stores key their rows by [`Entity::id`].
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Aggregate root: an entity that owns other records and is the only unit
/// updated as a whole.
///
/// Orders are the aggregate roots of this system; their line items are only
/// reachable through them.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the persisted state.
    ///
    /// Starts at 1 on first insert and is bumped by the store on every update.
    fn version(&self) -> u64;
}

/// Version an update was decided against.
///
/// The store rejects the update when the stored aggregate has moved on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExpectedVersion(pub u64);

impl ExpectedVersion {
    pub fn of<A: AggregateRoot>(aggregate: &A) -> Self {
        Self(aggregate.version())
    }

    pub fn check(self, actual: u64) -> StoreResult<()> {
        if self.0 == actual {
            Ok(())
        } else {
            Err(StoreError::Concurrency(format!(
                "stale write (expected: {}, actual: {actual})",
                self.0
            )))
        }
    }
}
