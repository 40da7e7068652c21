use stride_core::types::DbId;
use stride_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};

pub mod activities;
pub mod hydration;
pub mod injury_reports;
pub mod preferences;
pub mod supplement_logs;
pub mod user_profiles;
pub mod users;

/// Reject requests for an athlete with no `users` row.
///
/// Shared by the activity and supplement log handlers, which both treat an
/// unknown athlete as a bad request rather than a missing resource.
pub(crate) async fn ensure_athlete_exists(pool: &sqlx::PgPool, athlete_id: DbId) -> AppResult<()> {
    if UserRepo::exists(pool, athlete_id).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid athlete ID".to_string()))
    }
}
