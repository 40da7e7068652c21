//! Request extractors shared by the handlers.
//!
//! - [`json_body::JsonBody`] -- Parses the request body as a JSON value,
//!   rejecting malformed or non-JSON input with a validation error.
//! - [`params::PathParam`] / [`params::QueryParams`] -- Typed URL parts that
//!   reject with a validation error instead of plain text.

pub mod json_body;
pub mod params;
