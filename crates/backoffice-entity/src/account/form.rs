//! Account create/update payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::AccountStatus;

/// Body of `POST user`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Contact email.
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Initial status.
    #[serde(default)]
    pub status: AccountStatus,
    /// Backend role identifier.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role_id: String,
}

/// Body of `PATCH user/{id}`. Only the present fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountPatch {
    /// New login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
    /// New role identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
}

impl AccountPatch {
    /// Whether the patch carries no change.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.status.is_none()
            && self.role_id.is_none()
    }
}
