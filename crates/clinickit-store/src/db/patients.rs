//! Patient repository.

use bson::doc;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::debug;

use crate::config::PATIENTS_COLLECTION;
use crate::error::StoreResult;
use crate::models::{NewPatient, Patient, PatientId, PatientPatch};

/// CRUD operations over the patients collection.
///
/// Every call is an independent round trip to the store; there is no
/// caching, no retry, and no transaction spanning calls, so a caller's
/// read-then-write sequence is last-writer-wins on the patched fields.
#[derive(Clone)]
pub struct PatientRepository {
    collection: Collection<Patient>,
}

impl PatientRepository {
    pub(crate) fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(PATIENTS_COLLECTION),
        }
    }

    /// The whole collection in the store's natural order. No pagination;
    /// suitable only while the dataset is small.
    pub async fn list_all(&self) -> StoreResult<Vec<Patient>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Look up by id. Absent is `None`, not an error.
    pub async fn get_by_id(&self, id: &PatientId) -> StoreResult<Option<Patient>> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?)
    }

    /// Look up by phone number.
    ///
    /// Phone numbers are a soft natural key: if several patients share one,
    /// the store's natural match order decides which record is returned.
    pub async fn get_by_phone(&self, phone_number: &str) -> StoreResult<Option<Patient>> {
        Ok(self
            .collection
            .find_one(doc! { "phoneNumber": phone_number })
            .await?)
    }

    /// Insert a new patient, stamping `createdAt == updatedAt`.
    pub async fn create(&self, new: NewPatient) -> StoreResult<PatientId> {
        let now = Utc::now();
        let patient = Patient {
            id: PatientId::generate(),
            first_name: new.first_name,
            last_name: new.last_name,
            phone_number: new.phone_number,
            date_of_birth: new.date_of_birth,
            language: new.language,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert_one(&patient).await?;
        debug!(patient_id = %patient.id, "created patient");
        Ok(patient.id)
    }

    /// Apply a partial patch. Unnamed fields keep their prior values;
    /// `updatedAt` is always refreshed.
    ///
    /// Returns `false` when no record matched the id (zero rows affected),
    /// never an error.
    pub async fn update(&self, id: &PatientId, patch: PatientPatch) -> StoreResult<bool> {
        let update = patch.into_update(Utc::now());
        let result = self
            .collection
            .update_one(doc! { "_id": id.as_object_id() }, update)
            .await?;
        debug!(patient_id = %id, matched = result.matched_count, "updated patient");
        Ok(result.matched_count > 0)
    }

    /// Delete by id. Returns `false` when no record matched.
    ///
    /// No cascade: the patient's appointments are left in place.
    pub async fn delete(&self, id: &PatientId) -> StoreResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        debug!(patient_id = %id, deleted = result.deleted_count, "deleted patient");
        Ok(result.deleted_count > 0)
    }
}
