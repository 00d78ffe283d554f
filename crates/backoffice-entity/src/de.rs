//! Deserialization helpers for loosely typed backend fields.
//!
//! The backend returns identifiers as strings on some endpoints and as
//! numbers on others.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Accept `"42"`, `42` or `42.0` and produce `"42"`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        StringOrNumber::Float(f) => f.to_string(),
    })
}
