//! Error types for the persistence layer.
//!
//! Not-found is deliberately not an error here: reads return `None` and
//! mutations report whether a record matched. Only configuration problems,
//! connection failures, malformed identifiers, and driver failures surface
//! as [`StoreError`].

use thiserror::Error;

/// Persistence layer errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Required configuration is missing. Fatal at startup, not retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The initial connection attempt failed. Fatal to the first caller;
    /// not retried internally.
    #[error("failed to connect to document store: {0}")]
    Connection(#[source] mongodb::error::Error),

    /// An identifier does not have the store's id shape (24 hex characters).
    #[error("malformed record id: {0:?}")]
    InvalidId(String),

    /// Any other driver failure, propagated unchanged.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
