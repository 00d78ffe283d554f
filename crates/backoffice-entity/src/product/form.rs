//! Product create/update payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST product`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    /// Units in stock.
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i64,
}

/// Body of `PATCH product/{id}`. Only the present fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    /// New stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i64>,
}

impl ProductPatch {
    /// Whether the patch carries no change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}
