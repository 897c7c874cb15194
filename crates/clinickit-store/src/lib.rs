//! Clinickit Store
//!
//! Persistence layer for a small clinic-management application: two
//! document collections (patients, appointments) behind thin asynchronous
//! repositories.
//!
//! # Architecture
//!
//! ```text
//! Presentation ──▶ Action layer ──▶ Repositories ──▶ Store ──▶ MongoDB
//!                 (clinickit-actions)   │
//!                                       ├─ PatientRepository
//!                                       └─ AppointmentRepository
//! ```
//!
//! The [`Store`] is built once at the composition root from a
//! [`StoreConfig`] and shared; every repository call is an independent
//! asynchronous round trip with no caching, transactions, or retries on
//! top of the driver. Not-found is signaled in the return value (`None`
//! for reads, `false` for mutations), never as an error.
//!
//! # Modules
//!
//! - [`config`]: connection string from the environment, fixed names
//! - [`db`]: store handle and the two repositories
//! - [`models`]: domain types, typed ids, typed partial patches
//! - [`error`]: the [`StoreError`] taxonomy

pub mod config;
pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::StoreConfig;
pub use db::{AppointmentRepository, PatientRepository, Store};
pub use error::{StoreError, StoreResult};
pub use models::{
    Appointment, AppointmentId, AppointmentPatch, AppointmentStatus, NewAppointment, NewPatient,
    Patch, Patient, PatientId, PatientPatch, UnknownStatus,
};
