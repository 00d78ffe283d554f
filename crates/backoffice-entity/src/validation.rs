//! Form validation bridge into [`AppError`].

use validator::Validate;

use backoffice_core::error::ErrorKind;
use backoffice_core::{AppError, AppResult};

/// Validate a form payload before it is sent to the backend.
pub fn validate_form<T: Validate>(form: &T) -> AppResult<()> {
    form.validate().map_err(|e| {
        AppError::with_source(ErrorKind::Validation, format!("Invalid input: {e}"), e)
    })
}
