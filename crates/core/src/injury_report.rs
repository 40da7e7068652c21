//! Injury report rules.
//!
//! A report body names a user and a list of injuries. Body-level problems
//! reject the whole request; a bad entry in the list only rejects that entry
//! and the rest are still recorded.

use serde_json::Value;

use crate::error::CoreError;
use crate::payload::{first_missing_field, require_object};
use crate::types::DbId;

/// Longest accepted `injury_location`, in characters (VARCHAR(100)).
pub const MAX_LOCATION_LEN: usize = 100;

/// Status attached to every entry that was recorded.
pub const REPORT_SUBMITTED: &str = "Injury report submitted successfully.";

/// Per-entry error for an entry lacking an id or a location.
pub const INCOMPLETE_ENTRY: &str = "Each injury must include 'injury_id' and 'injury_location'.";

/// Check the body: an object with a `user_sk` and a non-empty `injuries` list.
pub fn validate_report_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;

    if first_missing_field(obj, &["user_sk"]).is_some() {
        return Err(CoreError::Validation("'user_sk' is required.".to_string()));
    }

    match obj.get("injuries").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => Ok(()),
        _ => Err(CoreError::Validation(
            "'injuries' must be a list of injury objects.".to_string(),
        )),
    }
}

/// Check one entry of the list, returning its id and location when usable.
///
/// The `Err` is the message reported for that entry alone.
pub fn check_entry(
    injury_id: Option<DbId>,
    injury_location: Option<&str>,
) -> Result<(DbId, &str), String> {
    let (Some(injury_id), Some(location)) = (injury_id, injury_location) else {
        return Err(INCOMPLETE_ENTRY.to_string());
    };
    if injury_id <= 0 || location.trim().is_empty() {
        return Err(INCOMPLETE_ENTRY.to_string());
    }
    if location.chars().count() > MAX_LOCATION_LEN {
        return Err(format!(
            "'injury_location' must be at most {MAX_LOCATION_LEN} characters."
        ));
    }
    Ok((injury_id, location))
}

/// Per-entry error for an id with no injury profile behind it.
pub fn unknown_injury(injury_id: DbId) -> String {
    format!("Injury with id {injury_id} not found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn user_sk_is_required() {
        let err = validate_report_payload(&json!({"injuries": [{}]})).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: 'user_sk' is required.");
    }

    #[test]
    fn injuries_must_be_a_non_empty_list() {
        for injuries in [json!(null), json!([]), json!({"injury_id": 1}), json!("knee")] {
            let err = validate_report_payload(&json!({"user_sk": 1, "injuries": injuries}))
                .unwrap_err();
            assert!(err.to_string().contains("must be a list of injury objects"));
        }
        assert!(validate_report_payload(&json!({"user_sk": 1, "injuries": [{}]})).is_ok());
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_matches!(validate_report_payload(&json!({})), Err(CoreError::Validation(_)));
    }

    #[test]
    fn entries_need_both_id_and_location() {
        assert_eq!(check_entry(None, Some("knee")).unwrap_err(), INCOMPLETE_ENTRY);
        assert_eq!(check_entry(Some(3), None).unwrap_err(), INCOMPLETE_ENTRY);
        assert_eq!(check_entry(Some(3), Some("  ")).unwrap_err(), INCOMPLETE_ENTRY);
        assert_eq!(check_entry(Some(0), Some("knee")).unwrap_err(), INCOMPLETE_ENTRY);
        assert_eq!(check_entry(Some(3), Some("knee")), Ok((3, "knee")));
    }

    #[test]
    fn overlong_location_is_rejected() {
        let location = "a".repeat(MAX_LOCATION_LEN + 1);
        let err = check_entry(Some(3), Some(&location)).unwrap_err();
        assert!(err.contains("at most 100 characters"));
    }
}
