//! Appointment models.

use std::fmt;
use std::str::FromStr;

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AppointmentId, Patch, PatientId};

/// The four appointment states the application recognizes.
///
/// The repository itself stores the status as plain text and does not check
/// it against this enumeration; enforcement belongs to the action layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside [`AppointmentStatus::ALL`].
#[derive(Debug, thiserror::Error)]
#[error("unknown appointment status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(UnknownStatus(raw.to_string())),
        }
    }
}

/// A stored appointment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: AppointmentId,
    /// Textual patient reference (the patient id's hex form). Referential
    /// integrity is NOT enforced: the referenced patient may have been
    /// deleted, and deleting a patient leaves its appointments in place.
    pub patient_id: String,
    pub doctor_name: String,
    pub specialty: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub appointment_date: DateTime<Utc>,
    /// Stored as given; see [`AppointmentStatus`].
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating an appointment; the repository assigns the id and
/// timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub doctor_name: String,
    pub specialty: String,
    pub appointment_date: DateTime<Utc>,
    /// `None` defaults to "scheduled" at creation.
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn new(
        patient_id: PatientId,
        doctor_name: impl Into<String>,
        specialty: impl Into<String>,
        appointment_date: DateTime<Utc>,
    ) -> Self {
        Self {
            patient_id,
            doctor_name: doctor_name.into(),
            specialty: specialty.into(),
            appointment_date,
            status: None,
            notes: None,
        }
    }
}

/// Partial update for an appointment.
///
/// Notes are the one clearable attribute, so their presence is tagged three
/// ways; every other field uses plain option semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub patient_id: Option<PatientId>,
    pub doctor_name: Option<String>,
    pub specialty: Option<String>,
    pub appointment_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub notes: Patch<String>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.patient_id.is_none()
            && self.doctor_name.is_none()
            && self.specialty.is_none()
            && self.appointment_date.is_none()
            && self.status.is_none()
            && self.notes.is_keep()
    }

    /// Build the update document. `updatedAt` is always refreshed.
    pub(crate) fn into_update(self, now: DateTime<Utc>) -> Document {
        let mut set = doc! {};
        if let Some(v) = self.patient_id {
            set.insert("patientId", v.to_hex());
        }
        if let Some(v) = self.doctor_name {
            set.insert("doctorName", v);
        }
        if let Some(v) = self.specialty {
            set.insert("specialty", v);
        }
        if let Some(v) = self.appointment_date {
            set.insert("appointmentDate", bson::DateTime::from_chrono(v));
        }
        if let Some(v) = self.status {
            set.insert("status", v);
        }
        if let Patch::Set(v) = &self.notes {
            set.insert("notes", v.clone());
        }
        set.insert("updatedAt", bson::DateTime::from_chrono(now));

        let mut update = doc! { "$set": set };
        if self.notes == Patch::Clear {
            update.insert("$unset", doc! { "notes": "" });
        }
        update
    }
}
