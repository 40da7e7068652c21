//! Hydration log rules.

use serde_json::Value;

use crate::error::CoreError;
use crate::payload::{require_fields, require_object};

/// Keys a hydration log body must contain.
pub const REQUIRED_FIELDS: &[&str] = &["user_sk", "quantity"];

/// Largest single intake accepted, in millilitres.
pub const MAX_QUANTITY_ML: i32 = 5_000;

/// A logged quantity must be a positive number of millilitres.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(
            "'quantity' must be a positive integer".to_string(),
        ));
    }
    if quantity > MAX_QUANTITY_ML {
        return Err(CoreError::Validation(format!(
            "'quantity' too large: {quantity} (max {MAX_QUANTITY_ML})"
        )));
    }
    Ok(())
}

/// Check a log body: both keys present.
pub fn validate_create_payload(body: &Value) -> Result<(), CoreError> {
    let obj = require_object(body)?;
    require_fields(obj, REQUIRED_FIELDS, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_sk_is_required() {
        let err = validate_create_payload(&json!({"quantity": 250})).unwrap_err();
        assert!(err.to_string().contains("Missing required field: user_sk"));
    }

    #[test]
    fn quantity_bounds() {
        assert!(validate_quantity(250).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-10).is_err());
        assert!(validate_quantity(MAX_QUANTITY_ML + 1).is_err());
    }
}
