//! Path and query-string extractors.
//!
//! Axum's `Path` and `Query` reject with a plain-text body. These wrappers
//! report the same failures as `VALIDATION_ERROR` JSON so a malformed id in
//! the URL looks like any other bad input.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use stride_core::error::CoreError;

use crate::error::AppError;

/// Typed path segments, e.g. `PathParam(user_sk): PathParam<DbId>`.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected path parameter");
                Err(AppError::Core(CoreError::Validation(format!(
                    "Invalid path parameter: {}",
                    rejection.body_text()
                ))))
            }
        }
    }
}

/// Typed query string, e.g. `QueryParams(lookup): QueryParams<ProfileLookup>`.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Rejected query string");
                Err(AppError::Core(CoreError::Validation(format!(
                    "Invalid query parameter: {}",
                    rejection.body_text()
                ))))
            }
        }
    }
}
