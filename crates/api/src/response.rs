//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope; writes that return nothing but a
//! confirmation use `{ "message": ... }`. Use these instead of ad-hoc
//! `serde_json::json!` bodies to get consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": "..." }` confirmation body for writes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
