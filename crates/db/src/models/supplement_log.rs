//! Supplement intake log model and DTOs.
//!
//! Unlike the `supplements` rows owned by a preference, intake logs are
//! free-standing records a user keeps about what they take and why.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `supplement_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupplementLog {
    pub id: DbId,
    pub user_sk: DbId,
    pub name: String,
    pub dosage: f64,
    pub frequency: i32,
    pub purpose: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a supplement intake.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupplementLog {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub dosage: f64,
    pub frequency: i32,
    pub purpose: serde_json::Value,
}

/// DTO for partially updating an intake record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSupplementLog {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub dosage: Option<f64>,
    pub frequency: Option<i32>,
    pub purpose: Option<serde_json::Value>,
}
