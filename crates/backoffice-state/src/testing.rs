//! Fixtures shared by the unit tests of this crate.

use std::sync::Arc;
use std::time::Duration;

use backoffice_client::testing::FakeBackend;
use backoffice_client::{
    AccountService, ApiClient, AuthService, MemoryTokenStore, ProductService, TokenStore,
};
use backoffice_entity::{Account, AccountStatus};

use crate::feedback::Feedback;
use crate::store::Store;

pub fn account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        username: format!("user-{id}"),
        email: format!("{id}@example.vn"),
        status: AccountStatus::Active,
        role_id: "1".to_string(),
    }
}

pub fn information_body(id: &str) -> String {
    format!(
        r#"{{"status":200,"data":{{"_id":"{id}","email":"{id}@example.vn","username":"user-{id}","roleId":"1","status":"active"}}}}"#
    )
}

/// A store, a fake backend, and a token slot wired together.
pub struct Harness {
    pub store: Store,
    pub backend: Arc<FakeBackend>,
    pub tokens: Arc<MemoryTokenStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            backend: FakeBackend::shared(),
            tokens: Arc::new(MemoryTokenStore::new()),
        }
    }

    pub fn with_token(self, token: &str) -> Self {
        self.tokens.write(token, Duration::from_secs(3600)).unwrap();
        self
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.backend.clone(), self.tokens.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.backend.clone(), "auth")
    }

    pub fn accounts(&self) -> AccountService {
        AccountService::new(self.client())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.client())
    }

    pub fn feedback(&self) -> Feedback {
        Feedback::new(self.store.clone(), 5.0)
    }

    pub fn alert_descriptions(&self) -> Vec<String> {
        self.store
            .state()
            .alerts
            .iter()
            .map(|e| e.description.clone())
            .collect()
    }
}
