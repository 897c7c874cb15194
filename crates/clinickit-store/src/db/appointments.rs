//! Appointment repository.

use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::debug;

use crate::config::APPOINTMENTS_COLLECTION;
use crate::error::StoreResult;
use crate::models::{
    Appointment, AppointmentId, AppointmentPatch, AppointmentStatus, NewAppointment, PatientId,
};

/// CRUD operations over the appointments collection, filterable by patient.
///
/// Same failure shape as [`super::PatientRepository`]: reads return `None`
/// or an empty list when nothing matches, mutations report whether a record
/// matched.
#[derive(Clone)]
pub struct AppointmentRepository {
    collection: Collection<Appointment>,
}

impl AppointmentRepository {
    pub(crate) fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(APPOINTMENTS_COLLECTION),
        }
    }

    /// The whole collection in the store's natural order, no pagination.
    pub async fn list_all(&self) -> StoreResult<Vec<Appointment>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Appointments whose stored patient reference equals `patient_id`.
    ///
    /// The filter is an exact match on the hex text written at creation; no
    /// join or integrity check is performed, so a reference to a deleted
    /// patient still returns its appointments.
    pub async fn list_by_patient(&self, patient_id: &PatientId) -> StoreResult<Vec<Appointment>> {
        let cursor = self
            .collection
            .find(doc! { "patientId": patient_id.to_hex() })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new appointment, stamping `createdAt == updatedAt`.
    ///
    /// An omitted status defaults to "scheduled". A supplied status is
    /// stored as given; validating it against the enumeration is the action
    /// layer's job.
    pub async fn create(&self, new: NewAppointment) -> StoreResult<AppointmentId> {
        let now = Utc::now();
        let appointment = Appointment {
            id: AppointmentId::generate(),
            patient_id: new.patient_id.to_hex(),
            doctor_name: new.doctor_name,
            specialty: new.specialty,
            appointment_date: new.appointment_date,
            status: new
                .status
                .unwrap_or_else(|| AppointmentStatus::Scheduled.as_str().to_string()),
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert_one(&appointment).await?;
        debug!(appointment_id = %appointment.id, patient_id = %appointment.patient_id, "created appointment");
        Ok(appointment.id)
    }

    /// Apply a partial patch; `updatedAt` is always refreshed.
    ///
    /// Returns `false` when no record matched the id.
    pub async fn update(&self, id: &AppointmentId, patch: AppointmentPatch) -> StoreResult<bool> {
        let update = patch.into_update(Utc::now());
        let result = self
            .collection
            .update_one(doc! { "_id": id.as_object_id() }, update)
            .await?;
        debug!(appointment_id = %id, matched = result.matched_count, "updated appointment");
        Ok(result.matched_count > 0)
    }

    /// Delete by id. Returns `false` when no record matched.
    pub async fn delete(&self, id: &AppointmentId) -> StoreResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        debug!(appointment_id = %id, deleted = result.deleted_count, "deleted appointment");
        Ok(result.deleted_count > 0)
    }
}
