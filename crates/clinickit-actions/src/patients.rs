//! Patient form actions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clinickit_store::{NewPatient, PatientId, PatientPatch, Store};
use serde::Deserialize;
use tracing::debug;

use crate::{trimmed, ActionError, ActionResult};

const REQUIRED_MSG: &str = "First name, last name, and phone number are required.";

/// Raw patient form fields, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub language: Option<String>,
    /// `YYYY-MM-DD`, as produced by an HTML date input.
    pub date_of_birth: Option<String>,
}

fn parse_birth_date(raw: &str) -> ActionResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ActionError::Invalid(format!("Invalid date of birth: {raw:?}.")))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

impl PatientForm {
    /// Validate and map into the fields for a create call.
    ///
    /// First name, last name and phone number are required; language
    /// defaults to "en"; a missing birth date falls back to now.
    pub fn into_new_patient(self) -> ActionResult<NewPatient> {
        let (first_name, last_name, phone_number) = self.required_fields()?;
        let language = trimmed(self.language.as_ref()).unwrap_or_else(|| "en".to_string());
        let date_of_birth = match trimmed(self.date_of_birth.as_ref()) {
            Some(raw) => parse_birth_date(&raw)?,
            None => Utc::now(),
        };
        Ok(NewPatient {
            first_name,
            last_name,
            phone_number,
            date_of_birth,
            language,
        })
    }

    /// Validate and map into a partial patch for an update call.
    ///
    /// The form resubmits the full name/phone block, so those three fields
    /// are still required; language and birth date only enter the patch
    /// when supplied.
    pub fn into_patch(self) -> ActionResult<PatientPatch> {
        let (first_name, last_name, phone_number) = self.required_fields()?;
        let date_of_birth = match trimmed(self.date_of_birth.as_ref()) {
            Some(raw) => Some(parse_birth_date(&raw)?),
            None => None,
        };
        Ok(PatientPatch {
            first_name: Some(first_name),
            last_name: Some(last_name),
            phone_number: Some(phone_number),
            date_of_birth,
            language: trimmed(self.language.as_ref()),
        })
    }

    fn required_fields(&self) -> ActionResult<(String, String, String)> {
        let first_name =
            trimmed(self.first_name.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let last_name =
            trimmed(self.last_name.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        let phone_number =
            trimmed(self.phone_number.as_ref()).ok_or(ActionError::Invalid(REQUIRED_MSG.into()))?;
        Ok((first_name, last_name, phone_number))
    }
}

/// Create a patient from raw form input.
pub async fn create_patient(store: &Store, form: PatientForm) -> ActionResult<PatientId> {
    let new = form.into_new_patient()?;
    let id = store.patients().create(new).await?;
    debug!(patient_id = %id, "patient created from form");
    Ok(id)
}

/// Update a patient from raw form input. Returns whether a record matched.
pub async fn update_patient(store: &Store, id: &str, form: PatientForm) -> ActionResult<bool> {
    let id = PatientId::parse(id)?;
    let patch = form.into_patch()?;
    Ok(store.patients().update(&id, patch).await?)
}

/// Delete a patient by id text. Returns whether a record matched.
pub async fn delete_patient(store: &Store, id: &str) -> ActionResult<bool> {
    let id = PatientId::parse(id)?;
    Ok(store.patients().delete(&id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn full_form() -> PatientForm {
        PatientForm {
            first_name: Some("  Ana ".to_string()),
            last_name: Some("Lopez".to_string()),
            phone_number: Some(" 555-0100 ".to_string()),
            language: Some("es".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
        }
    }

    #[test]
    fn test_create_trims_and_parses() {
        let new = full_form().into_new_patient().unwrap();
        assert_eq!(new.first_name, "Ana");
        assert_eq!(new.phone_number, "555-0100");
        assert_eq!(new.language, "es");
        assert_eq!(new.date_of_birth.year(), 1990);
        assert_eq!(new.date_of_birth.month(), 1);
    }

    #[test]
    fn test_create_defaults_language() {
        let mut form = full_form();
        form.language = None;
        assert_eq!(form.into_new_patient().unwrap().language, "en");

        let mut form = full_form();
        form.language = Some("   ".to_string());
        assert_eq!(form.into_new_patient().unwrap().language, "en");
    }

    #[test]
    fn test_create_requires_name_and_phone() {
        for missing in ["first_name", "last_name", "phone_number"] {
            let mut form = full_form();
            match missing {
                "first_name" => form.first_name = None,
                "last_name" => form.last_name = Some("  ".to_string()),
                _ => form.phone_number = None,
            }
            let err = form.into_new_patient().unwrap_err();
            assert!(matches!(err, ActionError::Invalid(msg) if msg == REQUIRED_MSG));
        }
    }

    #[test]
    fn test_create_rejects_bad_date() {
        let mut form = full_form();
        form.date_of_birth = Some("01/01/1990".to_string());
        assert!(matches!(
            form.into_new_patient(),
            Err(ActionError::Invalid(_))
        ));
    }

    #[test]
    fn test_create_missing_date_falls_back_to_now() {
        let mut form = full_form();
        form.date_of_birth = None;
        let before = Utc::now();
        let new = form.into_new_patient().unwrap();
        assert!(new.date_of_birth >= before);
        assert!(new.date_of_birth <= Utc::now());
    }

    #[test]
    fn test_patch_includes_only_supplied_optionals() {
        let mut form = full_form();
        form.language = None;
        form.date_of_birth = None;
        let patch = form.into_patch().unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Ana"));
        assert_eq!(patch.language, None);
        assert_eq!(patch.date_of_birth, None);
    }
}
