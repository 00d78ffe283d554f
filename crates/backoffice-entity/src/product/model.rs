//! Product record.

use serde::{Deserialize, Serialize};

use crate::de::string_or_number;

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier.
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub quantity: i64,
}
