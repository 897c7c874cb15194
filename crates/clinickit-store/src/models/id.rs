//! Typed record identifiers.
//!
//! Newtypes over the store's native object id so a patient id cannot be
//! handed to an appointment lookup by accident. Display and parsing use the
//! 24-character hex form, which is also the textual representation stored in
//! an appointment's patient reference.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(ObjectId);

/// Identifier of an appointment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(ObjectId);

impl PatientId {
    pub(crate) fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the hex form. Malformed text is [`StoreError::InvalidId`].
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// The hex form, as stored in appointment patient references.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl AppointmentId {
    pub(crate) fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse the hex form. Malformed text is [`StoreError::InvalidId`].
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    pub(crate) fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for PatientId {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl FromStr for AppointmentId {
    type Err = StoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let id = PatientId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = PatientId::parse("not-an-id").unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(raw) if raw == "not-an-id"));

        // Right characters, wrong length.
        assert!(AppointmentId::parse("507f1f77").is_err());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(PatientId::generate(), PatientId::generate());
    }
}
