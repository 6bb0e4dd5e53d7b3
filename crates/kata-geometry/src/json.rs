//! JSON helpers.
//!
//! Deserializing goes through a concrete serde type rather than patching
//! behavior onto an untyped value: `from_json::<Rectangle>(text)` yields a
//! `Rectangle` with its methods available.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A value that could not be written to or read from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Serialization failed.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The text was not valid JSON for the requested type.
    #[error("failed to deserialize value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Compact JSON for `value`.
///
/// `to_json(&Rectangle::new(10, 20))` is `{"width":10,"height":20}`.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if `value` cannot be represented as
/// JSON (for example a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Populate a `T` from JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Deserialize`] if `json` is malformed or does not
/// have the fields `T` requires.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Deserialize)
}
