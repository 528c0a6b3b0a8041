use serde::Deserialize;

use crate::domain::client::Client;
use crate::pagination::Paginated;

/// Query parameters accepted by the clients page.
#[derive(Debug, Default, Deserialize)]
pub struct ClientsQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the clients template.
#[derive(Debug)]
pub struct ClientsPageData {
    /// Paginated list of clients to show in the table.
    pub clients: Paginated<Client>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
