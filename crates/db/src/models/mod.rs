//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity;
pub mod hydration;
pub mod injury_report;
pub mod preference;
pub mod supplement_log;
pub mod user;
pub mod user_profile;
