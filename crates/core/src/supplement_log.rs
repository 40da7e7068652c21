//! Rules for the per-user supplement intake log.

use serde_json::Value;

use crate::error::CoreError;
use crate::payload::{require_fields, require_object};

/// Keys an intake-log create body must contain; also the only updatable keys.
pub const FIELDS: &[&str] = &["name", "dosage", "frequency", "purpose"];

/// Check a create body: every field present.
pub fn validate_create_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    require_fields(obj, FIELDS, None)
}

/// Check an update body: non-empty and only known fields.
pub fn validate_update_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    match obj.keys().find(|k| !FIELDS.contains(&k.as_str())) {
        Some(unknown) => Err(CoreError::Validation(format!(
            "Unknown field '{unknown}'. Updatable fields: {}",
            FIELDS.join(", ")
        ))),
        None => Ok(()),
    }
}

/// Dosage must be a finite, non-negative amount.
pub fn validate_dosage(dosage: f64) -> Result<(), CoreError> {
    if dosage.is_finite() && dosage >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Dosage must be a non-negative number".to_string(),
        ))
    }
}

/// Frequency is a count of intakes per day.
pub fn validate_frequency(frequency: i32) -> Result<(), CoreError> {
    if frequency >= 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Frequency must not be negative".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_requires_all_fields() {
        let body = json!({"name": "Creatine", "dosage": 5.0, "frequency": 1});
        let err = validate_create_payload(&body).unwrap_err();
        assert!(err.to_string().contains("purpose"));
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let err = validate_update_payload(&json!({"brand": "x"})).unwrap_err();
        assert!(err.to_string().contains("Unknown field 'brand'"));
        assert!(validate_update_payload(&json!({"dosage": 2.5})).is_ok());
    }

    #[test]
    fn numeric_limits() {
        assert!(validate_dosage(0.0).is_ok());
        assert!(validate_dosage(-0.5).is_err());
        assert!(validate_frequency(3).is_ok());
        assert!(validate_frequency(-1).is_err());
    }
}
