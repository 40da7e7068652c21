//! Repository for the `supplement_logs` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use crate::models::supplement_log::{CreateSupplementLog, SupplementLog, UpdateSupplementLog};

/// Column list for `supplement_logs` queries.
const COLUMNS: &str = "id, user_sk, name, dosage, frequency, purpose, created_at, updated_at";

/// Provides CRUD operations for supplement intake records.
pub struct SupplementLogRepo;

impl SupplementLogRepo {
    /// Record a supplement intake for a user.
    pub async fn create(
        pool: &PgPool,
        user_sk: DbId,
        input: &CreateSupplementLog,
    ) -> Result<SupplementLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO supplement_logs (user_sk, name, dosage, frequency, purpose) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupplementLog>(&query)
            .bind(user_sk)
            .bind(&input.name)
            .bind(input.dosage)
            .bind(input.frequency)
            .bind(&input.purpose)
            .fetch_one(pool)
            .await
    }

    /// Find an intake record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SupplementLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM supplement_logs WHERE id = $1");
        sqlx::query_as::<_, SupplementLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every intake record.
    pub async fn list(pool: &PgPool) -> Result<Vec<SupplementLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM supplement_logs ORDER BY id");
        sqlx::query_as::<_, SupplementLog>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one user's intake records.
    pub async fn list_by_user(
        pool: &PgPool,
        user_sk: DbId,
    ) -> Result<Vec<SupplementLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM supplement_logs WHERE user_sk = $1 ORDER BY id");
        sqlx::query_as::<_, SupplementLog>(&query)
            .bind(user_sk)
            .fetch_all(pool)
            .await
    }

    /// Partially update an intake record.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSupplementLog,
    ) -> Result<Option<SupplementLog>, sqlx::Error> {
        let query = format!(
            "UPDATE supplement_logs SET \
                 name = COALESCE($2, name), \
                 dosage = COALESCE($3, dosage), \
                 frequency = COALESCE($4, frequency), \
                 purpose = COALESCE($5, purpose) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SupplementLog>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.dosage)
            .bind(input.frequency)
            .bind(&input.purpose)
            .fetch_optional(pool)
            .await
    }

    /// Delete an intake record. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM supplement_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
