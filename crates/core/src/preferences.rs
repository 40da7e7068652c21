//! Payload rules for the preference aggregate.
//!
//! A preference create must carry `shoe_type`, `injuries` and
//! `running_surface`; `supplements` is optional. Nested objects are checked
//! field by field so the caller learns exactly which key is missing.

use serde_json::Value;

use crate::error::CoreError;
use crate::payload::{nested_object, require_fields, require_object};

/* --------------------------------------------------------------------------
   Field names
   -------------------------------------------------------------------------- */

/// Top-level keys a create payload must contain, in reporting order.
pub const REQUIRED_FIELDS: &[&str] = &["shoe_type", "injuries", "running_surface"];

/// Keys of a supplement or shoe-type sub-object.
pub const PRODUCT_FIELDS: &[&str] = &["name", "model", "description"];

/// The five injury flags of an injury profile.
pub const INJURY_FLAGS: &[&str] = &[
    "tennis_elbow",
    "muscle_strain",
    "bicep_tendonitis",
    "fracture",
    "forearm_strain",
];

/// Sub-object keys accepted by an update.
const OBJECT_KEYS: &[&str] = &["supplements", "shoe_type", "injuries"];

/// Every key an update may carry.
pub const UPDATABLE_FIELDS: &[&str] = &["supplements", "shoe_type", "injuries", "running_surface"];

/// Maximum length, in characters, of an external user identifier
/// (`user_preferences.user_id` is `VARCHAR(50)`).
pub const MAX_USER_ID_LEN: usize = 50;

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

/// Validate an external user identifier taken from the request path.
pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "User id must not be empty".to_string(),
        ));
    }
    let chars = user_id.chars().count();
    if chars > MAX_USER_ID_LEN {
        return Err(CoreError::Validation(format!(
            "User id too long: {chars} chars (max {MAX_USER_ID_LEN})"
        )));
    }
    Ok(())
}

/// Check that a create body has every required field, including nested ones.
///
/// A top-level key set to `null` counts as missing. `supplements` may be
/// absent or `null`; when it is an object it must be complete.
pub fn validate_create_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    require_fields(obj, REQUIRED_FIELDS, None)?;

    let shoe_type = nested_object(obj, "shoe_type")?;
    require_fields(shoe_type, PRODUCT_FIELDS, Some("shoe_type"))?;

    let injuries = nested_object(obj, "injuries")?;
    require_fields(injuries, INJURY_FLAGS, Some("injuries"))?;

    if obj.get("supplements").is_some_and(|v| !v.is_null()) {
        let supplements = nested_object(obj, "supplements")?;
        require_fields(supplements, PRODUCT_FIELDS, Some("supplements"))?;
    }

    Ok(())
}

/// Check the shape of a partial update body.
///
/// Every key is optional, but the body itself must be a non-empty object,
/// every key must be one of [`UPDATABLE_FIELDS`], and any sub-object that is
/// present must actually be an object.
pub fn validate_update_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    if let Some(unknown) = obj.keys().find(|k| !UPDATABLE_FIELDS.contains(&k.as_str())) {
        return Err(CoreError::Validation(format!(
            "Unknown field '{unknown}'. Updatable fields: {}",
            UPDATABLE_FIELDS.join(", ")
        )));
    }
    for key in OBJECT_KEYS {
        if obj.get(*key).is_some_and(|v| !v.is_null()) {
            nested_object(obj, key)?;
        }
    }
    Ok(())
}
