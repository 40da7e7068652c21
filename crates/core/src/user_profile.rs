//! User profile rules: required keys, password strength, mobile number
//! format and the numeric body fields.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Number, Value};

use crate::error::CoreError;
use crate::payload::{require_fields, INVALID_BODY_MESSAGE};

/// Keys a profile create body must contain.
pub const REQUIRED_FIELDS: &[&str] = &["username", "email_id", "password", "height", "weight"];

/// Keys a profile update body may contain. `email_id` is fixed at creation.
pub const UPDATABLE_FIELDS: &[&str] = &[
    "username",
    "password",
    "height",
    "weight",
    "experience_level",
    "distance_goal",
    "preferences",
    "mobile_no",
];

/// Fields that accept a JSON number or a numeric string.
pub const NUMERIC_FIELDS: &[&str] = &["height", "weight", "distance_goal"];

/// Characters a password may be made of.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const PASSWORD_RULE_MESSAGE: &str = "Password must be at least 8 characters long and \
     include a letter, a number and a special character (@$!%*?&)";

pub const MOBILE_RULE_MESSAGE: &str = "Mobile number must be a 10-digit numeric value";

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("valid regex"));

static MOBILE_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// A password must be long enough, drawn from letters, digits and
/// [`PASSWORD_SPECIALS`], and contain at least one of each.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    let strong = password.chars().count() >= MIN_PASSWORD_LEN
        && PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if strong {
        Ok(())
    } else {
        Err(CoreError::Validation(PASSWORD_RULE_MESSAGE.to_string()))
    }
}

/// A mobile number is exactly ten ASCII digits.
pub fn validate_mobile_no(mobile_no: &str) -> Result<(), CoreError> {
    if MOBILE_NO.is_match(mobile_no) {
        Ok(())
    } else {
        Err(CoreError::Validation(MOBILE_RULE_MESSAGE.to_string()))
    }
}

/// Check a create body and normalise its numeric fields in place.
pub fn prepare_create_payload(body: &mut Value) -> Result<(), CoreError> {
    let obj = require_object_mut(body)?;
    require_fields(obj, REQUIRED_FIELDS, None)?;
    normalize_numeric_fields(obj)
}

/// Check an update body and normalise its numeric fields in place.
///
/// Any key outside [`UPDATABLE_FIELDS`] rejects the whole update.
pub fn prepare_update_payload(body: &mut Value) -> Result<(), CoreError> {
    let obj = require_object_mut(body)?;
    if let Some(unknown) = obj.keys().find(|key| !UPDATABLE_FIELDS.contains(&key.as_str())) {
        return Err(CoreError::Validation(format!(
            "Unknown field '{unknown}'. Updatable fields: {}",
            UPDATABLE_FIELDS.join(", ")
        )));
    }
    normalize_numeric_fields(obj)
}

fn require_object_mut(body: &mut Value) -> Result<&mut Map<String, Value>, CoreError> {
    match body.as_object_mut() {
        Some(obj) if !obj.is_empty() => Ok(obj),
        _ => Err(CoreError::Validation(INVALID_BODY_MESSAGE.to_string())),
    }
}

/// Replace numeric strings (`"72.5"`) with numbers and reject anything else
/// that is not a finite, non-negative number. `null` is left alone.
fn normalize_numeric_fields(obj: &mut Map<String, Value>) -> Result<(), CoreError> {
    for field in NUMERIC_FIELDS {
        let Some(value) = obj.get_mut(*field) else {
            continue;
        };
        let number = match value {
            Value::Null => continue,
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        let Some(number) = number.filter(|n| n.is_finite()) else {
            return Err(CoreError::Validation(format!(
                "'{field}' must be a numeric value"
            )));
        };
        if number < 0.0 {
            return Err(CoreError::Validation(format!(
                "'{field}' must not be negative"
            )));
        }
        if let Some(n) = Number::from_f64(number) {
            *value = Value::Number(n);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn password_needs_letter_digit_and_special() {
        assert!(validate_password("Stride@2024").is_ok());
        assert!(validate_password("abc12345").is_err());
        assert!(validate_password("abcdefg!").is_err());
        assert!(validate_password("1234567!").is_err());
        assert!(validate_password("Ab1!").is_err());
    }

    #[test]
    fn password_rejects_characters_outside_the_set() {
        assert!(validate_password("Stride 2024!").is_err());
        assert!(validate_password("Stride#2024!").is_err());
    }

    #[test]
    fn mobile_number_is_ten_digits() {
        assert!(validate_mobile_no("9876543210").is_ok());
        assert!(validate_mobile_no("987654321").is_err());
        assert!(validate_mobile_no("98765432100").is_err());
        assert!(validate_mobile_no("98765-4321").is_err());
    }

    #[test]
    fn create_requires_credentials_and_measurements() {
        let mut body = json!({"username": "ana", "email_id": "ana@example.com", "password": "x"});
        let err = prepare_create_payload(&mut body).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Missing required field: height");
    }

    #[test]
    fn numeric_strings_are_normalised() {
        let mut body = json!({"height": "172.5", "weight": 68});
        prepare_update_payload(&mut body).unwrap();
        assert_eq!(body["height"], json!(172.5));
        assert_eq!(body["weight"], json!(68));
    }

    #[test]
    fn non_numeric_measurement_is_rejected() {
        let mut body = json!({"distance_goal": "far"});
        let err = prepare_update_payload(&mut body).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "'distance_goal' must be a numeric value");

        let mut body = json!({"weight": true});
        assert!(prepare_update_payload(&mut body).is_err());

        let mut body = json!({"height": -1});
        assert!(prepare_update_payload(&mut body).is_err());
    }

    #[test]
    fn update_rejects_email_change_and_unknown_keys() {
        let mut body = json!({"email_id": "new@example.com"});
        let err = prepare_update_payload(&mut body).unwrap_err();
        assert!(err.to_string().contains("Unknown field 'email_id'"));
    }

    #[test]
    fn empty_update_is_rejected() {
        let mut body = json!({});
        assert_matches!(prepare_update_payload(&mut body), Err(CoreError::Validation(_)));
    }
}
