//! Repository for the `injury_profiles` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use super::PgTx;
use crate::models::preference::{InjuryFlags, InjuryPatch, InjuryProfile};

/// Column list for `injury_profiles` queries.
const COLUMNS: &str = "\
    id, tennis_elbow, muscle_strain, bicep_tendonitis, fracture, \
    forearm_strain, created_at, updated_at";

/// Provides data access for injury profiles.
pub struct InjuryProfileRepo;

impl InjuryProfileRepo {
    /// Insert an injury profile.
    pub async fn create(
        tx: &mut PgTx<'_>,
        flags: &InjuryFlags,
    ) -> Result<InjuryProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO injury_profiles \
                 (tennis_elbow, muscle_strain, bicep_tendonitis, fracture, forearm_strain) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InjuryProfile>(&query)
            .bind(flags.tennis_elbow)
            .bind(flags.muscle_strain)
            .bind(flags.bicep_tendonitis)
            .bind(flags.fracture)
            .bind(flags.forearm_strain)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find an injury profile by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InjuryProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM injury_profiles WHERE id = $1");
        sqlx::query_as::<_, InjuryProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Merge a patch into an existing profile. Absent flags keep their value.
    pub async fn apply_patch(
        tx: &mut PgTx<'_>,
        id: DbId,
        patch: &InjuryPatch,
    ) -> Result<Option<InjuryProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE injury_profiles SET \
                 tennis_elbow = COALESCE($2, tennis_elbow), \
                 muscle_strain = COALESCE($3, muscle_strain), \
                 bicep_tendonitis = COALESCE($4, bicep_tendonitis), \
                 fracture = COALESCE($5, fracture), \
                 forearm_strain = COALESCE($6, forearm_strain) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InjuryProfile>(&query)
            .bind(id)
            .bind(patch.tennis_elbow)
            .bind(patch.muscle_strain)
            .bind(patch.bicep_tendonitis)
            .bind(patch.fracture)
            .bind(patch.forearm_strain)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Delete an injury profile. Returns `true` if a row was deleted.
    pub async fn delete(tx: &mut PgTx<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM injury_profiles WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
