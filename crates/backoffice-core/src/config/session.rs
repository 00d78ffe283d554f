//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Where the session token is kept and for how long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie slot holding the token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Token lifetime after a successful login, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// File backing the cookie slot.
    #[serde(default = "default_token_file")]
    pub token_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_seconds: default_ttl(),
            token_file: default_token_file(),
        }
    }
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_ttl() -> u64 {
    60 * 60
}

fn default_token_file() -> String {
    "data/session.json".to_string()
}
