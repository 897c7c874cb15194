//! Display helpers for rendered lists.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use clinickit_store::{Appointment, Patient, PatientId, Store};
use futures::future::try_join_all;

use crate::{ActionError, ActionResult};

/// Label shown for an appointment whose patient reference does not resolve.
pub const UNKNOWN_PATIENT: &str = "unknown";

/// Full display name for a patient, or [`UNKNOWN_PATIENT`].
pub fn patient_label(patient: Option<&Patient>) -> String {
    match patient {
        Some(p) => format!("{} {}", p.first_name, p.last_name),
        None => UNKNOWN_PATIENT.to_string(),
    }
}

/// Whole-year age at `today`.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Resolve display labels for every patient referenced by `appointments`,
/// keyed by the stored reference text.
///
/// Fans out one lookup per distinct reference, all in flight at once.
/// References that do not resolve, including textual ids of deleted
/// patients, map to [`UNKNOWN_PATIENT`]; this is where the unvalidated
/// reference is lazily resolved.
pub async fn patient_labels(
    store: &Store,
    appointments: &[Appointment],
) -> ActionResult<HashMap<String, String>> {
    let repo = store.patients();
    let refs: HashSet<&str> = appointments.iter().map(|a| a.patient_id.as_str()).collect();

    let lookups = refs.into_iter().map(|raw| {
        let repo = repo.clone();
        let raw = raw.to_string();
        async move {
            let patient = match PatientId::parse(&raw) {
                Ok(id) => repo.get_by_id(&id).await?,
                // A stored reference that is not even id-shaped renders the
                // same as a missing patient.
                Err(_) => None,
            };
            Ok::<_, ActionError>((raw, patient_label(patient.as_ref())))
        }
    });

    Ok(try_join_all(lookups).await?.into_iter().collect())
}
