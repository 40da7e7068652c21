//! User profile model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `user_profiles` table. The password hash never leaves
/// the server.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub email_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub experience_level: Option<String>,
    pub distance_goal: Option<f64>,
    pub preferences: Option<String>,
    pub mobile_no: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile. `password` is plain text and is hashed
/// before it reaches the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserProfile {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email_id: String,
    pub password: String,
    #[validate(length(max = 10))]
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: f64,
    pub weight: f64,
    #[validate(length(max = 50))]
    pub experience_level: Option<String>,
    pub distance_goal: Option<f64>,
    pub preferences: Option<String>,
    pub mobile_no: Option<String>,
}

/// DTO for updating a profile. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserProfile {
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,
    pub password: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[validate(length(max = 50))]
    pub experience_level: Option<String>,
    pub distance_goal: Option<f64>,
    pub preferences: Option<String>,
    pub mobile_no: Option<String>,
}
