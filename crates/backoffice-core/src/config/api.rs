//! Backend REST API configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the admin backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is resolved against. Keep the trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path prefix of the authentication endpoints (`login`, `information`).
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_prefix: default_auth_prefix(),
            timeout_seconds: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/".to_string()
}

fn default_auth_prefix() -> String {
    "auth".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u64 {
    10
}
