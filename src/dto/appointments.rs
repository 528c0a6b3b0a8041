use serde::{Deserialize, Serialize};

use crate::domain::appointment::AppointmentWithClient;
use crate::domain::client::Client;
use crate::pagination::Paginated;

/// Query parameters accepted by the appointments page. Dates and status
/// arrive as raw strings from the filter form; blank or malformed values
/// are dropped during mapping rather than failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct AppointmentsQuery {
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

/// Filter values echoed back into the form controls.
#[derive(Debug, Default, Serialize)]
pub struct AppointmentFilters {
    pub search: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

impl AppointmentFilters {
    /// True when any filter control holds a value (shows "Clear filters").
    pub fn any(&self) -> bool {
        self.search.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.status.is_some()
    }
}

/// Data required to render the appointments template.
#[derive(Debug)]
pub struct AppointmentsPageData {
    /// Paginated appointments, each annotated with its resolved client.
    pub appointments: Paginated<AppointmentWithClient>,
    /// Clients available in the scheduling dropdown.
    pub clients: Vec<Client>,
    /// Active filter values echoed back to the template.
    pub filters: AppointmentFilters,
    pub has_filters: bool,
}
