//! Login credentials.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST <auth-prefix>/login`.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Username.
    #[validate(length(min = 1, message = "Please input your Username!"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Please input your Password!"))]
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
