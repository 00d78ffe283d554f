//! The JSON envelope every backend endpoint answers with.

use serde::{Deserialize, Serialize};

/// `{ status, message?, data? }` as returned by the backend.
///
/// `status` is the backend's own status code and may disagree with the
/// HTTP status of the response carrying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Embedded status code.
    pub status: u16,
    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the embedded status reports success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
