//! Thin wrappers over dialoguer prompts.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use dialoguer::{Confirm, Input, Password, Select};

use backoffice_core::error::AppError;

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

/// Pick one of `items`, starting at `default`; returns its index.
pub fn select<T: Display>(prompt: &str, items: &[T], default: usize) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(input_error)
}

/// Free text, prefilled with `initial`.
pub fn text(prompt: &str, initial: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

/// A parsed value with a default.
pub fn value<T>(prompt: &str, default: T) -> Result<T, AppError>
where
    T: Clone + Display + FromStr,
    <T as FromStr>::Err: Debug + Display,
{
    Input::<T>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(input_error)
}

/// Hidden text; may be empty when `allow_empty`.
pub fn password(prompt: &str, allow_empty: bool) -> Result<String, AppError> {
    Password::new()
        .with_prompt(prompt)
        .allow_empty_password(allow_empty)
        .interact()
        .map_err(input_error)
}

pub fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

/// `Some(new)` when `new` differs from `old`.
pub fn changed(old: &str, new: String) -> Option<String> {
    (new != old).then_some(new)
}
