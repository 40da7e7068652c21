//! Activity entity model and DTOs.
//!
//! The activity kind is stored as `activity_type` but travels over the wire
//! as `type`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub activity_id: DbId,
    pub athlete_id: DbId,
    pub name: String,
    pub distance: f64,
    pub moving_time: i32,
    pub elapsed_time: i32,
    pub total_elevation_gain: f64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_date: Timestamp,
    pub description: String,
    pub calories: f64,
}

/// DTO for logging a new activity. Numeric fields default to zero.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivity {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub distance: Option<f64>,
    #[validate(range(min = 0))]
    pub moving_time: Option<i32>,
    #[validate(range(min = 0))]
    pub elapsed_time: Option<i32>,
    pub total_elevation_gain: Option<f64>,
    pub start_date: Option<Timestamp>,
    pub calories: Option<f64>,
}
