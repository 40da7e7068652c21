//! Shape checks for raw JSON request bodies.
//!
//! Handlers receive bodies as `serde_json::Value` so that a missing field is
//! reported by name (`Missing required field: shoe_type`) instead of as a
//! generic deserialization failure. Once the shape is known to be complete
//! the body is decoded into its typed DTO with [`decode`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Message returned when the body is absent, not an object, or empty.
pub const INVALID_BODY_MESSAGE: &str = "Invalid input. JSON data is required.";

/// Require `value` to be a non-empty JSON object.
pub fn require_object(value: &Value) -> Result<&Map<String, Value>, CoreError> {
    match value.as_object() {
        Some(obj) if !obj.is_empty() => Ok(obj),
        _ => Err(CoreError::Validation(INVALID_BODY_MESSAGE.to_string())),
    }
}

/// Return the first of `fields` that is absent from `obj` or set to `null`.
pub fn first_missing_field<'a>(obj: &Map<String, Value>, fields: &[&'a str]) -> Option<&'a str> {
    fields
        .iter()
        .copied()
        .find(|field| obj.get(*field).map_or(true, Value::is_null))
}

/// Fail with a validation error naming the first missing field.
///
/// `prefix` qualifies nested fields, e.g. `shoe_type.model`.
pub fn require_fields(
    obj: &Map<String, Value>,
    fields: &[&str],
    prefix: Option<&str>,
) -> Result<(), CoreError> {
    match first_missing_field(obj, fields) {
        None => Ok(()),
        Some(field) => Err(CoreError::Validation(match prefix {
            Some(prefix) => format!("Missing required field: {prefix}.{field}"),
            None => format!("Missing required field: {field}"),
        })),
    }
}

/// Require `obj[key]` to be a JSON object and return it.
pub fn nested_object<'v>(
    obj: &'v Map<String, Value>,
    key: &str,
) -> Result<&'v Map<String, Value>, CoreError> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| CoreError::Validation(format!("Field '{key}' must be a JSON object")))
}

/// Decode a validated body into its typed form.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CoreError> {
    serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("Invalid field value: {e}")))
}
