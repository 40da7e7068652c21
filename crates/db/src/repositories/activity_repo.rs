//! Repository for the `activities` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use crate::models::activity::{Activity, CreateActivity};

/// Column list for `activities` queries.
const COLUMNS: &str = "\
    activity_id, athlete_id, name, distance, moving_time, elapsed_time, \
    total_elevation_gain, activity_type, start_date, description, calories";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Log a new activity for an athlete.
    ///
    /// Omitted numeric fields fall back to the column defaults (zero), an
    /// omitted `start_date` to the current time.
    pub async fn create(
        pool: &PgPool,
        athlete_id: DbId,
        input: &CreateActivity,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities \
                 (athlete_id, name, activity_type, description, distance, moving_time, \
                  elapsed_time, total_elevation_gain, start_date, calories) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, 0), \
                     COALESCE($7, 0), COALESCE($8, 0), COALESCE($9, NOW()), COALESCE($10, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(athlete_id)
            .bind(&input.name)
            .bind(&input.activity_type)
            .bind(&input.description)
            .bind(input.distance)
            .bind(input.moving_time)
            .bind(input.elapsed_time)
            .bind(input.total_elevation_gain)
            .bind(input.start_date)
            .bind(input.calories)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its ID.
    pub async fn find_by_id(pool: &PgPool, activity_id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE activity_id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(activity_id)
            .fetch_optional(pool)
            .await
    }

    /// List every activity, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY start_date DESC, activity_id DESC");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// List one athlete's activities, most recent first.
    pub async fn list_by_athlete(
        pool: &PgPool,
        athlete_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities \
             WHERE athlete_id = $1 \
             ORDER BY start_date DESC, activity_id DESC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(athlete_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an activity. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, activity_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE activity_id = $1")
            .bind(activity_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
