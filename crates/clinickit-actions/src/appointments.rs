//! Appointment form actions.

use chrono::{DateTime, NaiveDateTime, Utc};
use clinickit_store::{
    AppointmentId, AppointmentPatch, AppointmentStatus, NewAppointment, Patch, PatientId, Store,
};
use serde::Deserialize;
use tracing::debug;

use crate::{trimmed, ActionError, ActionResult};

const REQUIRED_MSG: &str = "Patient, doctor, specialty and date are required.";

/// Raw appointment form fields, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentForm {
    pub patient_id: Option<String>,
    pub doctor_name: Option<String>,
    pub specialty: Option<String>,
    /// `YYYY-MM-DDTHH:MM`, as produced by an HTML datetime-local input.
    pub appointment_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

fn parse_appointment_date(raw: &str) -> ActionResult<DateTime<Utc>> {
    // datetime-local may carry seconds depending on the browser.
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ActionError::Invalid(format!("Invalid appointment date: {raw:?}.")))?;
    Ok(parsed.and_utc())
}

fn validated_status(raw: &str) -> ActionResult<String> {
    let status = raw
        .parse::<AppointmentStatus>()
        .map_err(|e| ActionError::Invalid(e.to_string()))?;
    Ok(status.as_str().to_string())
}

impl AppointmentForm {
    /// Validate and map into the fields for a create call.
    ///
    /// Patient, doctor, specialty and date are required; a supplied status
    /// must be one of the four recognized values and is otherwise left for
    /// the repository to default to "scheduled"; blank notes are omitted.
    pub fn into_new_appointment(self) -> ActionResult<NewAppointment> {
        let patient_raw =
            trimmed(self.patient_id.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let patient_id = PatientId::parse(&patient_raw)?;
        let doctor_name =
            trimmed(self.doctor_name.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let specialty =
            trimmed(self.specialty.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let date_raw = trimmed(self.appointment_date.as_ref())
            .ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let appointment_date = parse_appointment_date(&date_raw)?;

        let status = match trimmed(self.status.as_ref()) {
            Some(raw) => Some(validated_status(&raw)?),
            None => None,
        };

        Ok(NewAppointment {
            patient_id,
            doctor_name,
            specialty,
            appointment_date,
            status,
            notes: trimmed(self.notes.as_ref()),
        })
    }

    /// Validate and map into a partial patch for an update call.
    ///
    /// Only supplied fields enter the patch. Notes are three-state: absent
    /// keeps the stored value, blank clears it, anything else replaces it.
    pub fn into_patch(self) -> ActionResult<AppointmentPatch> {
        let mut patch = AppointmentPatch::default();
        if let Some(raw) = trimmed(self.patient_id.as_ref()) {
            patch.patient_id = Some(PatientId::parse(&raw)?);
        }
        patch.doctor_name = trimmed(self.doctor_name.as_ref());
        patch.specialty = trimmed(self.specialty.as_ref());
        if let Some(raw) = trimmed(self.appointment_date.as_ref()) {
            patch.appointment_date = Some(parse_appointment_date(&raw)?);
        }
        if let Some(raw) = trimmed(self.status.as_ref()) {
            patch.status = Some(validated_status(&raw)?);
        }
        patch.notes = match self.notes.as_deref().map(str::trim) {
            None => Patch::Keep,
            Some("") => Patch::Clear,
            Some(text) => Patch::Set(text.to_string()),
        };
        Ok(patch)
    }
}

/// Create an appointment from raw form input.
pub async fn create_appointment(store: &Store, form: AppointmentForm) -> ActionResult<AppointmentId> {
    let new = form.into_new_appointment()?;
    let id = store.appointments().create(new).await?;
    debug!(appointment_id = %id, "appointment created from form");
    Ok(id)
}

/// Update an appointment from raw form input. Returns whether a record
/// matched.
pub async fn update_appointment(
    store: &Store,
    id: &str,
    form: AppointmentForm,
) -> ActionResult<bool> {
    let id = AppointmentId::parse(id)?;
    let patch = form.into_patch()?;
    Ok(store.appointments().update(&id, patch).await?)
}

/// Delete an appointment by id text. Returns whether a record matched.
pub async fn delete_appointment(store: &Store, id: &str) -> ActionResult<bool> {
    let id = AppointmentId::parse(id)?;
    Ok(store.appointments().delete(&id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn full_form() -> AppointmentForm {
        AppointmentForm {
            patient_id: Some("507f1f77bcf86cd799439011".to_string()),
            doctor_name: Some(" Dr. Kim ".to_string()),
            specialty: Some("Cardiology".to_string()),
            appointment_date: Some("2025-03-01T10:00".to_string()),
            status: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_parses_datetime_local() {
        let new = full_form().into_new_appointment().unwrap();
        assert_eq!(new.doctor_name, "Dr. Kim");
        assert_eq!(new.appointment_date.year(), 2025);
        assert_eq!(new.appointment_date.hour(), 10);
        // Omitted status is left for the repository default.
        assert_eq!(new.status, None);
        assert_eq!(new.notes, None);
    }

    #[test]
    fn test_create_accepts_seconds_variant() {
        let mut form = full_form();
        form.appointment_date = Some("2025-03-01T10:00:30".to_string());
        let new = form.into_new_appointment().unwrap();
        assert_eq!(new.appointment_date.second(), 30);
    }

    #[test]
    fn test_create_requires_core_fields() {
        let mut form = full_form();
        form.specialty = None;
        let err = form.into_new_appointment().unwrap_err();
        assert!(matches!(err, ActionError::Invalid(msg) if msg == REQUIRED_MSG));
    }

    #[test]
    fn test_create_rejects_malformed_patient_id() {
        let mut form = full_form();
        form.patient_id = Some("zzz".to_string());
        assert!(matches!(
            form.into_new_appointment(),
            Err(ActionError::Store(_))
        ));
    }

    #[test]
    fn test_create_validates_status() {
        let mut form = full_form();
        form.status = Some("confirmed".to_string());
        assert_eq!(
            form.into_new_appointment().unwrap().status.as_deref(),
            Some("confirmed")
        );

        let mut form = full_form();
        form.status = Some("no_show".to_string());
        assert!(matches!(
            form.into_new_appointment(),
            Err(ActionError::Invalid(_))
        ));
    }

    #[test]
    fn test_create_omits_blank_notes() {
        let mut form = full_form();
        form.notes = Some("   ".to_string());
        assert_eq!(form.into_new_appointment().unwrap().notes, None);
    }

    #[test]
    fn test_patch_notes_three_states() {
        let mut form = AppointmentForm::default();
        assert_eq!(form.clone().into_patch().unwrap().notes, Patch::Keep);

        form.notes = Some("  ".to_string());
        assert_eq!(form.clone().into_patch().unwrap().notes, Patch::Clear);

        form.notes = Some(" bring ECG ".to_string());
        assert_eq!(
            form.into_patch().unwrap().notes,
            Patch::Set("bring ECG".to_string())
        );
    }

    #[test]
    fn test_patch_includes_only_supplied_fields() {
        let form = AppointmentForm {
            status: Some("cancelled".to_string()),
            ..Default::default()
        };
        let patch = form.into_patch().unwrap();
        assert_eq!(patch.status.as_deref(), Some("cancelled"));
        assert_eq!(patch.doctor_name, None);
        assert_eq!(patch.patient_id, None);
        assert!(!patch.is_empty());
    }
}
