//! Domain error model.

use thiserror::Error;

/// Result type used across the repository layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed-store error.
///
/// Keep this focused on deterministic domain failures (duplicate keys,
/// missing entries, rejected values). I/O concerns belong to the crates
/// that touch files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An entity with the same identifier is already stored.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// No entity with the requested identifier exists.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value failed validation (e.g. negative quantity).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl StoreError {
    pub fn duplicate_key(id: impl core::fmt::Display) -> Self {
        Self::DuplicateKey(id.to_string())
    }

    pub fn not_found(id: impl core::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
