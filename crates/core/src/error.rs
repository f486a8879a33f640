//! Domain and persistence error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type returned by persistence collaborators.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error for malformed values.
///
/// Business-rule failures of a specific module (order admission, status
/// changes) live in that module's own error type; this one only covers the
/// shared primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Failure reported by a persistence collaborator.
///
/// The domain never retries these; they abort the current operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Optimistic concurrency failure (stale version on update).
    #[error("concurrency conflict: {0}")]
    Concurrency(String),

    /// Update targeted a record that does not exist.
    #[error("record not found: {0}")]
    Missing(String),

    /// Backend failure (lock poisoning, IO, driver errors).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
