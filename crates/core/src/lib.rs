//! Domain types and pure validation for the Stride backend.
//!
//! Nothing in this crate performs I/O. Handlers call into these modules to
//! reject malformed input before any storage access happens.

pub mod activity;
pub mod error;
pub mod hydration;
pub mod injury_report;
pub mod payload;
pub mod preferences;
pub mod supplement_log;
pub mod types;
pub mod user_profile;
