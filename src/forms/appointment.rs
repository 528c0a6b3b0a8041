use serde::Deserialize;
use validator::Validate;

use crate::domain::appointment::{AppointmentStatus, NewAppointment, UpdateAppointment};
use crate::domain::types::{
    AppointmentId, AppointmentNotes, ClientId, TypeConstraintError,
};
use crate::forms::parse_local_datetime;

#[derive(Deserialize, Validate)]
/// Form data for scheduling a new appointment.
pub struct AddAppointmentForm {
    /// Selected client identifier.
    #[validate(length(min = 1, message = "Please select a client"))]
    pub client_id: String,
    /// Appointment slot from the `datetime-local` input.
    #[validate(length(min = 1, message = "Please pick a time"))]
    pub time: String,
    /// Free-text notes, may be empty.
    #[serde(default)]
    pub notes: String,
    /// Initial status, defaults to `scheduled` in the form.
    pub status: String,
}

impl AddAppointmentForm {
    /// Converts the validated form into a creation payload.
    pub fn to_new_appointment(&self) -> Result<NewAppointment, TypeConstraintError> {
        Ok(NewAppointment::new(
            self.client_id.parse::<ClientId>()?,
            parse_local_datetime(&self.time)?,
            AppointmentNotes::new(self.notes.as_str()),
            self.status.parse::<AppointmentStatus>()?,
        ))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for editing an existing appointment. The edit modal always
/// posts every field, so the update payload carries all of them.
pub struct SaveAppointmentForm {
    /// Appointment identifier.
    pub id: String,
    #[validate(length(min = 1, message = "Please select a client"))]
    pub client_id: String,
    #[validate(length(min = 1, message = "Please pick a time"))]
    pub time: String,
    #[serde(default)]
    pub notes: String,
    pub status: String,
}

impl SaveAppointmentForm {
    /// Converts the validated form into the target id plus update payload.
    /// Cleared notes are sent as an empty string so the backend blanks them.
    pub fn into_update(self) -> Result<(AppointmentId, UpdateAppointment), TypeConstraintError> {
        let id = self.id.parse::<AppointmentId>()?;
        let updates = UpdateAppointment {
            client_id: Some(self.client_id.parse::<ClientId>()?),
            time: Some(parse_local_datetime(&self.time)?),
            notes: Some(
                AppointmentNotes::new(self.notes)
                    .map(AppointmentNotes::into_inner)
                    .unwrap_or_default(),
            ),
            status: Some(self.status.parse::<AppointmentStatus>()?),
        };
        Ok((id, updates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_converts_to_payload() {
        let client_id = ClientId::new();
        let form = AddAppointmentForm {
            client_id: client_id.to_string(),
            time: "2024-03-01T10:30".to_string(),
            notes: "First visit".to_string(),
            status: "scheduled".to_string(),
        };
        let new_appointment = form.to_new_appointment().unwrap();
        assert_eq!(new_appointment.client_id, client_id);
        assert_eq!(new_appointment.notes.as_deref(), Some("First visit"));
        assert_eq!(new_appointment.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn bad_client_id_is_rejected() {
        let form = AddAppointmentForm {
            client_id: "not-a-uuid".to_string(),
            time: "2024-03-01T10:30".to_string(),
            notes: String::new(),
            status: "scheduled".to_string(),
        };
        assert_eq!(
            form.to_new_appointment(),
            Err(TypeConstraintError::InvalidUuid)
        );
    }

    #[test]
    fn save_form_blanks_cleared_notes() {
        let form = SaveAppointmentForm {
            id: AppointmentId::new().to_string(),
            client_id: ClientId::new().to_string(),
            time: "2024-03-01T10:30".to_string(),
            notes: "   ".to_string(),
            status: "completed".to_string(),
        };
        let (_, updates) = form.into_update().unwrap();
        assert_eq!(updates.notes.as_deref(), Some(""));
        assert_eq!(updates.status, Some(AppointmentStatus::Completed));
    }
}
