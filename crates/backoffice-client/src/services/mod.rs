//! One service per backend resource.

pub mod account;
pub mod auth;
pub mod product;

use std::sync::Arc;

use tracing::warn;

use backoffice_core::AppResult;

use crate::http::{ApiRequest, ApiResponse, HttpTransport};
use crate::token::TokenStore;

pub use account::AccountService;
pub use auth::AuthService;
pub use product::ProductService;

/// Transport plus token store, shared by the resource services.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client.
    pub fn new(transport: Arc<dyn HttpTransport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    /// Send `request` without credentials.
    pub async fn send(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        self.transport.send(request).await
    }

    /// Send `request` carrying the stored session token.
    ///
    /// The token is read on every call; with no token the request goes out
    /// anonymously and the backend decides.
    pub async fn send_authorized(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let token = self.tokens.read().unwrap_or_else(|e| {
            warn!(error = %e, "Token store unreadable, sending request without token");
            None
        });
        self.transport.send(request.bearer(token)).await
    }
}
