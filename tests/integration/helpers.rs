//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

pub use backoffice_client::testing::FakeBackend;
use backoffice_client::{MemoryTokenStore, TokenStore};
use backoffice_core::config::AppConfig;
use backoffice_state::AppContext;

/// Test application context
pub struct TestApp {
    /// Fully wired services, store, and gate
    pub ctx: AppContext,
    /// The backend double behind every service
    pub backend: Arc<FakeBackend>,
    /// The session token slot
    pub tokens: Arc<MemoryTokenStore>,
}

impl TestApp {
    /// Create a test application with no stored token
    pub fn new() -> Self {
        let config = AppConfig::load("tests/fixtures/test_config.toml", "test")
            .expect("Failed to load test config");
        let backend = Arc::new(FakeBackend::default());
        let tokens = Arc::new(MemoryTokenStore::new());
        let ctx = AppContext::with_parts(config, backend.clone(), tokens.clone());
        Self {
            ctx,
            backend,
            tokens,
        }
    }

    /// Create a test application holding `token`
    pub fn with_token(token: &str) -> Self {
        let app = Self::new();
        app.tokens
            .write(token, Duration::from_secs(3600))
            .expect("Failed to store token");
        app
    }

    /// The stored token, if any
    pub fn token(&self) -> Option<String> {
        self.tokens.read().expect("Failed to read token")
    }

    /// Alert titles in queue order
    pub fn alert_messages(&self) -> Vec<String> {
        self.ctx
            .store
            .state()
            .alerts
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Alert bodies in queue order
    pub fn alert_descriptions(&self) -> Vec<String> {
        self.ctx
            .store
            .state()
            .alerts
            .iter()
            .map(|e| e.description.clone())
            .collect()
    }
}

/// A "who am I" success body
pub fn information(id: &str, username: &str, role_id: &str, status: &str) -> String {
    serde_json::json!({
        "status": 200,
        "data": {
            "_id": id,
            "email": format!("{username}@example.vn"),
            "username": username,
            "roleId": role_id,
            "status": status,
        }
    })
    .to_string()
}

/// A login success body
pub fn login_ok(token: &str) -> String {
    serde_json::json!({ "status": 200, "data": { "token": token } }).to_string()
}
