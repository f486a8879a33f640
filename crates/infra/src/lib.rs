//! Infrastructure layer: in-memory implementations of the persistence
//! collaborators, plus demo reference data.

pub mod seed;
pub mod store;

pub use store::InMemoryStores;
