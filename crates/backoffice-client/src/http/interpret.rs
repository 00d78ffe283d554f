//! Turning raw backend responses into results.
//!
//! | response                                   | outcome          |
//! |--------------------------------------------|------------------|
//! | HTTP 403, or embedded status 403           | `Authorization`  |
//! | other non-2xx HTTP status                  | error by status  |
//! | 2xx with embedded status outside 200..300  | error by status  |
//! | 2xx with an unparseable body               | `Serialization`  |
//! | 2xx with an empty body                     | `Ok(None)`       |

use serde::de::DeserializeOwned;
use serde_json::Value;

use backoffice_core::error::ErrorKind;
use backoffice_core::types::ApiEnvelope;
use backoffice_core::{AppError, AppResult};

use super::ApiResponse;

/// Message carried by every permission refusal.
pub const INSUFFICIENT_PERMISSION: &str = "insufficient permission";

/// Check `response` and return the envelope's `data`, if any.
pub fn interpret(response: &ApiResponse, operation: &str) -> AppResult<Option<Value>> {
    if response.status == 403 {
        return Err(forbidden(operation, envelope_message(response)));
    }

    if !response.is_success() {
        let message = envelope_message(response)
            .unwrap_or_else(|| format!("{operation} failed with HTTP {}", response.status));
        return Err(AppError::new(kind_for_status(response.status), message));
    }

    if response.body.trim().is_empty() {
        return Ok(None);
    }

    let envelope: ApiEnvelope<Value> = serde_json::from_str(&response.body).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("{operation}: malformed response body"),
            e,
        )
    })?;

    if envelope.status == 403 {
        return Err(forbidden(operation, envelope.message));
    }

    if !envelope.is_success() {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("{operation} failed with status {}", envelope.status));
        return Err(AppError::new(kind_for_status(envelope.status), message));
    }

    Ok(envelope.data.filter(|d| !d.is_null()))
}

/// Like [`interpret`], but require and deserialize the `data` payload.
pub fn interpret_data<T: DeserializeOwned>(
    response: &ApiResponse,
    operation: &str,
) -> AppResult<T> {
    let data = interpret(response, operation)?.ok_or_else(|| {
        AppError::new(
            ErrorKind::Serialization,
            format!("{operation}: response carries no data"),
        )
    })?;

    serde_json::from_value(data).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("{operation}: unexpected data shape"),
            e,
        )
    })
}

fn forbidden(operation: &str, detail: Option<String>) -> AppError {
    let mut err = AppError::authorization(format!("{operation}: {INSUFFICIENT_PERMISSION}"));
    if let Some(detail) = detail {
        err.message = format!("{}: {detail}", err.message);
    }
    err
}

fn envelope_message(response: &ApiResponse) -> Option<String> {
    serde_json::from_str::<Value>(&response.body)
        .ok()?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        401 => ErrorKind::Authentication,
        403 => ErrorKind::Authorization,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        500..=599 => ErrorKind::ExternalService,
        _ => ErrorKind::Validation,
    }
}
