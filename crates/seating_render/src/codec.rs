//! JSON codec helpers.
//!
//! Thin wrappers around `serde_json`. Plans are pretty-printed since they are
//! read by people as often as by the page script.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Encode a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if serialisation fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    serde_json::to_string_pretty(value).map_err(RenderError::Encode)
}

/// Decode a value from JSON text.
///
/// # Errors
///
/// Returns [`RenderError::Decode`] if deserialisation fails.
pub fn from_json<'a, T: Deserialize<'a>>(text: &'a str) -> Result<T, RenderError> {
    serde_json::from_str(text).map_err(RenderError::Decode)
}
