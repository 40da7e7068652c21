//! Activity type constants and create-payload rules.

use serde_json::Value;

use crate::error::CoreError;
use crate::payload::{require_fields, require_object};

pub const ACTIVITY_RUN: &str = "run";
pub const ACTIVITY_WALK: &str = "walk";
pub const ACTIVITY_HIKE: &str = "hike";
pub const ACTIVITY_SWIM: &str = "swim";
pub const ACTIVITY_RIDE: &str = "ride";

/// All valid activity types.
pub const VALID_ACTIVITY_TYPES: &[&str] = &[
    ACTIVITY_RUN,
    ACTIVITY_WALK,
    ACTIVITY_HIKE,
    ACTIVITY_SWIM,
    ACTIVITY_RIDE,
];

/// Keys an activity create body must contain.
pub const REQUIRED_FIELDS: &[&str] = &["name", "type", "description"];

/// Validate that `activity_type` is one of the allowed values.
pub fn validate_activity_type(activity_type: &str) -> Result<(), CoreError> {
    if VALID_ACTIVITY_TYPES.contains(&activity_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid activity type '{activity_type}'. Must be one of: {}",
            VALID_ACTIVITY_TYPES.join(", ")
        )))
    }
}

/// Check a create body: required keys present and a known `type`.
pub fn validate_create_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    require_fields(obj, REQUIRED_FIELDS, None)?;
    match obj.get("type").and_then(Value::as_str) {
        Some(activity_type) => validate_activity_type(activity_type),
        None => Err(CoreError::Validation(
            "Field 'type' must be a string".to_string(),
        )),
    }
}

/// Reject negative distances, durations and calorie counts.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Field '{field}' must be a non-negative number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_every_known_type() {
        for t in VALID_ACTIVITY_TYPES {
            assert!(validate_activity_type(t).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let err = validate_activity_type("skate").unwrap_err();
        assert!(err.to_string().contains("Invalid activity type"));
    }

    #[test]
    fn missing_description_reported_before_type_check() {
        let err = validate_create_payload(&json!({"name": "Morning", "type": "skate"})).unwrap_err();
        assert!(err.to_string().contains("Missing required field: description"));
    }

    #[test]
    fn non_string_type_rejected() {
        let body = json!({"name": "Morning", "type": 3, "description": ""});
        assert!(validate_create_payload(&body).is_err());
    }

    #[test]
    fn negative_values_rejected() {
        assert!(validate_non_negative("distance", 5.2).is_ok());
        assert!(validate_non_negative("distance", -1.0).is_err());
        assert!(validate_non_negative("calories", f64::NAN).is_err());
    }
}
