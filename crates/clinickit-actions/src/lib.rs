//! Form-facing action layer for the clinic store.
//!
//! Sits between the presentation layer and the repositories: trims and
//! validates raw form input, applies defaults, converts HTML date values,
//! and maps the result into store calls. Status enumeration enforcement
//! lives here, by design; the repositories trust their callers.

pub mod appointments;
pub mod format;
pub mod patients;

pub use appointments::*;
pub use format::*;
pub use patients::*;

use clinickit_store::StoreError;
use thiserror::Error;

/// Action layer errors: rejected form input, or anything from the store.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Form input failed validation; the message is shown to the user as-is.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Trim a raw form value, treating blank as absent.
fn trimmed(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
