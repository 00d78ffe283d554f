//! Wiring of services, store, and session gate from configuration.

use std::sync::Arc;

use backoffice_client::{
    AccountService, ApiClient, AuthService, FileTokenStore, HttpTransport, ProductService,
    ReqwestTransport, TokenStore,
};
use backoffice_core::AppResult;
use backoffice_core::config::AppConfig;

use crate::feedback::Feedback;
use crate::screens::{AccountTable, ProductTable};
use crate::session::SessionGate;
use crate::store::Store;

/// Everything a front end needs, built once at start-up.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: Store,
    pub tokens: Arc<dyn TokenStore>,
    pub gate: SessionGate,
    pub accounts: AccountService,
    pub products: ProductService,
    pub feedback: Feedback,
}

impl AppContext {
    /// Build against the configured backend with a file-backed token.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config.api)?);
        let tokens = Arc::new(FileTokenStore::from_config(&config.session));
        Ok(Self::with_parts(config, transport, tokens))
    }

    /// Build from explicit transport and token store.
    pub fn with_parts(
        config: AppConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let store = Store::new();
        let client = ApiClient::new(transport.clone(), tokens.clone());
        let auth = AuthService::new(transport, config.api.auth_prefix.clone());
        let gate = SessionGate::new(
            store.clone(),
            auth,
            tokens.clone(),
            &config.session,
            &config.alerts,
        );
        let feedback = Feedback::new(store.clone(), config.alerts.default_duration_seconds);

        Self {
            accounts: AccountService::new(client.clone()),
            products: ProductService::new(client),
            config,
            store,
            tokens,
            gate,
            feedback,
        }
    }

    pub fn account_table(&self) -> AccountTable {
        AccountTable::new(
            self.accounts.clone(),
            self.feedback.clone(),
            self.config.api.page_size,
        )
    }

    pub fn product_table(&self) -> ProductTable {
        ProductTable::new(
            self.products.clone(),
            self.feedback.clone(),
            self.config.api.page_size,
        )
    }
}
