//! Store configuration.
//!
//! One required setting, the connection string, sourced from the
//! environment. The database and collection names are compiled-in
//! constants, not configurable at runtime.

use std::env;

use crate::error::{StoreError, StoreResult};

/// Environment variable holding the connection string.
pub const ENV_MONGODB_URI: &str = "MONGODB_URI";

pub const DB_NAME: &str = "clinickit";
pub const PATIENTS_COLLECTION: &str = "patients";
pub const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Connection settings for [`Store`](crate::db::Store).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub uri: String,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Read the connection string from [`ENV_MONGODB_URI`].
    ///
    /// An absent or blank variable is [`StoreError::Configuration`], meant
    /// to fail the process at startup.
    pub fn from_env() -> StoreResult<Self> {
        match env::var(ENV_MONGODB_URI) {
            Ok(uri) if !uri.trim().is_empty() => Ok(Self { uri }),
            _ => Err(StoreError::Configuration(format!(
                "{ENV_MONGODB_URI} is not set"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the two cases cannot race on the process environment.
    #[test]
    fn test_from_env() {
        env::remove_var(ENV_MONGODB_URI);
        let err = StoreConfig::from_env().unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));

        env::set_var(ENV_MONGODB_URI, "mongodb://localhost:27017");
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        env::remove_var(ENV_MONGODB_URI);
    }
}
