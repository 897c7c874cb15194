//! Patient models.

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PatientId;

/// A stored patient record.
///
/// Field names on the wire are camelCase, matching the collection's
/// document shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    /// Soft natural key: lookups by phone are supported, but uniqueness is
    /// not enforced by this layer.
    pub phone_number: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date_of_birth: DateTime<Utc>,
    /// Preferred language code ("en", "es", ...), free text.
    pub language: String,
    /// Set once at creation, never modified.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a patient; the repository assigns the id and
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub date_of_birth: DateTime<Utc>,
    pub language: String,
}

impl NewPatient {
    /// Create with the default language ("en").
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        date_of_birth: DateTime<Utc>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            date_of_birth,
            language: "en".to_string(),
        }
    }
}

/// Partial update for a patient. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub language: Option<String>,
}

impl PatientPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.date_of_birth.is_none()
            && self.language.is_none()
    }

    /// Build the update document. `updatedAt` is always refreshed, even for
    /// an otherwise empty patch.
    pub(crate) fn into_update(self, now: DateTime<Utc>) -> Document {
        let mut set = doc! {};
        if let Some(v) = self.first_name {
            set.insert("firstName", v);
        }
        if let Some(v) = self.last_name {
            set.insert("lastName", v);
        }
        if let Some(v) = self.phone_number {
            set.insert("phoneNumber", v);
        }
        if let Some(v) = self.date_of_birth {
            set.insert("dateOfBirth", bson::DateTime::from_chrono(v));
        }
        if let Some(v) = self.language {
            set.insert("language", v);
        }
        set.insert("updatedAt", bson::DateTime::from_chrono(now));
        doc! { "$set": set }
    }
}
