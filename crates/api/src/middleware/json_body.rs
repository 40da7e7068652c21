//! JSON body extractor.
//!
//! Handlers take the body as a raw [`serde_json::Value`] so field-presence
//! checks can name the first missing field before the body is decoded into a
//! typed DTO. Axum's own `Json` rejection is plain text; this extractor turns
//! it into the same `{"error", "code"}` shape every other failure uses.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;
use stride_core::error::CoreError;
use stride_core::payload::INVALID_BODY_MESSAGE;

use crate::error::AppError;

/// The request body parsed as an arbitrary JSON value.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected request body");
                Err(AppError::Core(CoreError::Validation(
                    INVALID_BODY_MESSAGE.to_string(),
                )))
            }
        }
    }
}
