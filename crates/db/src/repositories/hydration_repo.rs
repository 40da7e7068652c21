//! Repository for the `hydration_logs` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use crate::models::hydration::{CreateHydrationLog, HydrationLog};

/// Column list for `hydration_logs` queries.
const COLUMNS: &str = "id, user_sk, quantity, logged_at";

/// Provides data access for hydration logs.
pub struct HydrationRepo;

impl HydrationRepo {
    /// Record a water intake.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHydrationLog,
    ) -> Result<HydrationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO hydration_logs (user_sk, quantity) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HydrationLog>(&query)
            .bind(input.user_sk)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// A user's hydration history, newest first.
    pub async fn list_by_user(pool: &PgPool, user_sk: DbId) -> Result<Vec<HydrationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hydration_logs \
             WHERE user_sk = $1 \
             ORDER BY logged_at DESC, id DESC"
        );
        sqlx::query_as::<_, HydrationLog>(&query)
            .bind(user_sk)
            .fetch_all(pool)
            .await
    }
}
