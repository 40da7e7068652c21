//! Repository for the `shoe_types` table.
//!
//! Shoe-type rows are owned by a preference; every write runs inside the
//! caller's transaction.

use sqlx::PgPool;
use stride_core::types::DbId;

use super::PgTx;
use crate::models::preference::{ProductDetail, ProductPatch, ShoeType};

/// Column list for `shoe_types` queries.
const COLUMNS: &str = "id, name, model, description, created_at, updated_at";

/// Provides data access for shoe-type rows.
pub struct ShoeTypeRepo;

impl ShoeTypeRepo {
    /// Insert a shoe-type row.
    pub async fn create(tx: &mut PgTx<'_>, input: &ProductDetail) -> Result<ShoeType, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoe_types (name, model, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShoeType>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.description)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a shoe type by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShoeType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoe_types WHERE id = $1");
        sqlx::query_as::<_, ShoeType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Merge a patch into an existing shoe type.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn apply_patch(
        tx: &mut PgTx<'_>,
        id: DbId,
        patch: &ProductPatch,
    ) -> Result<Option<ShoeType>, sqlx::Error> {
        let query = format!(
            "UPDATE shoe_types SET \
                 name = COALESCE($2, name), \
                 model = COALESCE($3, model), \
                 description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShoeType>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.model)
            .bind(&patch.description)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Delete a shoe type. Returns `true` if a row was deleted.
    pub async fn delete(tx: &mut PgTx<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shoe_types WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
