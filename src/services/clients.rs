use validator::Validate;

use crate::api::{ClientApi, ClientListQuery, DEFAULT_PAGE_SIZE};
use crate::domain::client::Client;
use crate::dto::clients::{ClientsPageData, ClientsQuery};
use crate::forms::client::AddClientForm;
use crate::forms::validation_messages;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of clients for the clients table.
pub async fn load_clients_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: ClientsQuery,
) -> ServiceResult<ClientsPageData>
where
    A: ClientApi + Sync + ?Sized,
{
    let page = query.page.unwrap_or(1);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = ClientListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let envelope = api
        .list_clients(&user.token, list_query)
        .await
        .map_err(|err| {
            log::error!("Failed to list clients: {err}");
            err
        })?;

    Ok(ClientsPageData {
        clients: Paginated::from_envelope(envelope),
        search_query,
    })
}

/// Validates the add-client form and submits a new client record.
pub async fn add_client<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: AddClientForm,
) -> ServiceResult<Client>
where
    A: ClientApi + Sync + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Form(
            validation_messages(&errors).join("; "),
        ));
    }

    let new_client = form.to_new_client()?;

    api.create_client(&user.token, &new_client)
        .await
        .map_err(|err| {
            log::error!("Failed to add a client: {err}");
            err.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::api::mock::MockApi;
    use crate::domain::pagination::PageEnvelope;
    use crate::domain::types::ClientId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "auth0|tester".to_string(),
            email: "staff@example.com".to_string(),
            name: "Staff".to_string(),
            exp: (Utc::now().timestamp() + 3600) as usize,
            token: "bearer-token".to_string(),
        }
    }

    fn client(name: &str) -> Client {
        Client {
            id: ClientId::new(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+14155552671".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[actix_web::test]
    async fn blank_search_is_omitted_from_the_query() {
        let mut api = MockApi::new();
        api.expect_list_clients()
            .withf(|token, query| {
                token == "bearer-token"
                    && query.search.is_none()
                    && query.page == Some(2)
                    && query.page_size == Some(DEFAULT_PAGE_SIZE)
            })
            .returning(|_, _| {
                Ok(PageEnvelope {
                    items: vec![],
                    total: 0,
                    page: 2,
                    page_size: DEFAULT_PAGE_SIZE,
                    total_pages: 0,
                    has_next: false,
                    has_previous: true,
                })
            });

        let query = ClientsQuery {
            search: Some("   ".to_string()),
            page: Some(2),
        };
        let data = load_clients_page(&api, &test_user(), query).await.unwrap();
        assert_eq!(data.search_query, None);
        assert!(data.clients.items.is_empty());
    }

    #[actix_web::test]
    async fn add_client_rejects_invalid_form_before_the_network() {
        // No expectations: a validation failure must never reach the API.
        let api = MockApi::new();
        let form = AddClientForm {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            phone: "123".to_string(),
        };
        let err = add_client(&api, &test_user(), form).await.unwrap_err();
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[actix_web::test]
    async fn add_client_submits_normalized_payload() {
        let mut api = MockApi::new();
        api.expect_create_client()
            .withf(|_, new_client| {
                new_client.name == "Jane Doe" && new_client.email == "jane@example.com"
            })
            .returning(|_, _| Ok(client("Jane")));

        let form = AddClientForm {
            name: " Jane Doe ".to_string(),
            email: "Jane@Example.COM".to_string(),
            phone: "+14155552671".to_string(),
        };
        assert!(add_client(&api, &test_user(), form).await.is_ok());
    }
}
