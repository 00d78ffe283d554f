//! Authentication endpoints.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use backoffice_core::AppResult;
use backoffice_entity::{Account, Credentials, validate_form};

use crate::http::interpret::interpret_data;
use crate::http::{ApiRequest, HttpTransport};

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

/// `<auth-prefix>/login` and `<auth-prefix>/information`.
#[derive(Debug, Clone)]
pub struct AuthService {
    transport: Arc<dyn HttpTransport>,
    prefix: String,
}

impl AuthService {
    /// Create the service for endpoints under `prefix`.
    pub fn new(transport: Arc<dyn HttpTransport>, prefix: impl Into<String>) -> Self {
        Self {
            transport,
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    fn path(&self, endpoint: &str) -> String {
        if self.prefix.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}/{endpoint}", self.prefix)
        }
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<String> {
        validate_form(credentials)?;
        let body = serde_json::to_value(credentials)?;
        let response = self
            .transport
            .send(ApiRequest::post(self.path("login")).json(body))
            .await?;

        let data: LoginData = interpret_data(&response, "login")?;
        info!(username = %credentials.username, "Login accepted");
        Ok(data.token)
    }

    /// Resolve the account a token belongs to.
    pub async fn information(&self, token: &str) -> AppResult<Account> {
        let request = ApiRequest::get(self.path("information"))
            .bearer(Some(token.to_string()));
        let response = self.transport.send(request).await?;

        let account: Account = interpret_data(&response, "fetch current account")?;
        debug!(account_id = %account.id, "Current account resolved");
        Ok(account)
    }
}
