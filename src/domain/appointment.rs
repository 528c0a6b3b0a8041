use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::types::{
    AppointmentId, AppointmentNotes, ClientId, TypeConstraintError,
};

/// Lifecycle status of an appointment. The set is fixed by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// All statuses, in the order the UI lists them.
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// Wire representation expected by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for tables and dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(TypeConstraintError::UnknownStatus(other.to_string())),
        }
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        AppointmentStatus::Scheduled
    }
}

/// Appointment record as returned by the backend. `time` is the local
/// wall-clock slot the staff picked, without a timezone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_id: ClientId,
    pub time: NaiveDateTime,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// An appointment annotated with its resolved client record. `client` is
/// `None` when the per-row lookup failed; the page still renders.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AppointmentWithClient {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub client: Option<Client>,
}

/// Payload for `POST /api/v1/appointments`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewAppointment {
    pub client_id: ClientId,
    pub time: NaiveDateTime,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    #[must_use]
    pub fn new(
        client_id: ClientId,
        time: NaiveDateTime,
        notes: Option<AppointmentNotes>,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            client_id,
            time,
            notes: notes.map(AppointmentNotes::into_inner),
            status,
        }
    }
}

/// Partial payload for `PUT /api/v1/appointments/{id}`. Unset fields are
/// omitted from the body and left untouched server-side.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct UpdateAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}
