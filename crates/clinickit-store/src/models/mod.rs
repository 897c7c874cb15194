//! Domain models for the clinic store.

mod appointment;
mod id;
mod patch;
mod patient;

pub use appointment::*;
pub use id::*;
pub use patch::*;
pub use patient::*;
