//! Account endpoints (`user/...`).

use tracing::info;

use backoffice_core::AppResult;
use backoffice_core::types::{Page, PageRequest, SortField};
use backoffice_entity::{Account, AccountPatch, AccountStatus, NewAccount, validate_form};

use crate::http::ApiRequest;
use crate::http::interpret::{interpret, interpret_data};

use super::ApiClient;

/// Account administration.
#[derive(Debug, Clone)]
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    /// Create the service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of accounts.
    pub async fn list(&self, page: PageRequest, sort: &SortField) -> AppResult<Page<Account>> {
        let request = ApiRequest::get("user")
            .query("page", page.backend_page())
            .query("size", page.page_size)
            .query("sortBy", &sort.field)
            .query("sortDirection", sort.direction);
        let response = self.client.send_authorized(request).await?;
        interpret_data(&response, "list accounts")
    }

    /// A single account.
    pub async fn get(&self, id: &str) -> AppResult<Account> {
        let response = self
            .client
            .send_authorized(ApiRequest::get(format!("user/{id}")))
            .await?;
        interpret_data(&response, "fetch account")
    }

    /// Create an account. Returns the created record when the backend echoes it.
    pub async fn create(&self, form: &NewAccount) -> AppResult<Option<Account>> {
        validate_form(form)?;
        let response = self
            .client
            .send_authorized(ApiRequest::post("user").json(serde_json::to_value(form)?))
            .await?;
        let created = interpret(&response, "create account")?
            .and_then(|data| serde_json::from_value(data).ok());
        info!(username = %form.username, "Account created");
        Ok(created)
    }

    /// Patch an account.
    pub async fn update(&self, id: &str, patch: &AccountPatch) -> AppResult<()> {
        validate_form(patch)?;
        let request = ApiRequest::patch(format!("user/{id}"))
            .json(serde_json::to_value(patch)?);
        let response = self.client.send_authorized(request).await?;
        interpret(&response, "update account")?;
        info!(account_id = %id, "Account updated");
        Ok(())
    }

    /// Switch an account to `status`.
    pub async fn set_status(&self, id: &str, status: AccountStatus) -> AppResult<()> {
        let request = ApiRequest::patch(format!("user/{id}/status/{status}"))
            .json(serde_json::json!({}));
        let response = self.client.send_authorized(request).await?;
        interpret(&response, "update account status")?;
        info!(account_id = %id, %status, "Account status changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::http::Method;
    use crate::testing::FakeBackend;
    use crate::token::MemoryTokenStore;

    fn service(transport: Arc<FakeBackend>) -> AccountService {
        let tokens = MemoryTokenStore::with_token("T", Duration::from_secs(60)).unwrap();
        let tokens = Arc::new(tokens);
        AccountService::new(ApiClient::new(transport, tokens))
    }

    #[tokio::test]
    async fn test_list_sends_zero_based_page_and_sort() {
        let transport = FakeBackend::shared();
        transport.reply(
            200,
            r#"{"status":200,"data":{"content":[{"id":1,"username":"a","email":"a@x.vn","status":"active","roleId":1}],"totalElements":1}}"#,
        );
        let accounts = service(transport.clone());

        let page = accounts
            .list(PageRequest::new(2, 10), &SortField::default())
            .await
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 1);

        let sent = &transport.sent()[0];
        assert_eq!(sent.path, "user");
        assert_eq!(sent.token.as_deref(), Some("T"));
        assert_eq!(
            sent.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("size".to_string(), "10".to_string()),
                ("sortBy".to_string(), "id".to_string()),
                ("sortDirection".to_string(), "ASC".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_forbidden() {
        let transport = FakeBackend::shared();
        transport.reply(403, "");
        let err = service(transport)
            .list(PageRequest::default(), &SortField::default())
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
    }

    #[tokio::test]
    async fn test_set_status_path() {
        let transport = FakeBackend::shared();
        transport.reply(200, r#"{"status":200}"#);
        service(transport.clone())
            .set_status("7", AccountStatus::Inactive)
            .await
            .unwrap();

        let sent = &transport.sent()[0];
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.path, "user/7/status/inactive");
    }

    #[tokio::test]
    async fn test_create_accepts_status_201() {
        let transport = FakeBackend::shared();
        transport.reply(201, r#"{"status":201}"#);
        let form = NewAccount {
            username: "new".into(),
            email: "new@x.vn".into(),
            password: "p".into(),
            status: AccountStatus::Active,
            role_id: "2".into(),
        };
        assert_eq!(service(transport).create(&form).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = FakeBackend::shared();
        transport.fail();
        let err = service(transport).get("1").await.unwrap_err();
        assert!(err.is_transport());
    }
}
