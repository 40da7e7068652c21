//! Repository for the preference aggregate.
//!
//! A preference is written together with the rows it references
//! (`supplements`, `shoe_types`, `injury_profiles`). Every write below opens
//! one transaction and commits once at the end; any `?` before the commit
//! drops the transaction, which rolls it back, so a partially written
//! aggregate is never visible.

use sqlx::PgPool;

use super::{InjuryProfileRepo, PgTx, ShoeTypeRepo, SupplementRepo};
use crate::models::preference::{
    CreatePreference, Preference, PreferenceDetail, PreferenceDetailRow, UpdatePreference,
};

/// Column list for `user_preferences` queries.
const COLUMNS: &str = "\
    id, user_id, supplement_id, shoe_type_id, injury_profile_id, \
    running_surface, created_at, updated_at";

/// Projection of a preference joined with its referenced rows.
const DETAIL_SELECT: &str = "\
    SELECT p.user_id, p.running_surface, \
           s.name AS supplement_name, s.model AS supplement_model, \
           s.description AS supplement_description, \
           st.name AS shoe_name, st.model AS shoe_model, \
           st.description AS shoe_description, \
           ip.tennis_elbow, ip.muscle_strain, ip.bicep_tendonitis, \
           ip.fracture, ip.forearm_strain \
    FROM user_preferences p \
    LEFT JOIN supplements s ON s.id = p.supplement_id \
    JOIN shoe_types st ON st.id = p.shoe_type_id \
    JOIN injury_profiles ip ON ip.id = p.injury_profile_id";

/// Outcome of [`PreferenceRepo::update`].
#[derive(Debug)]
pub enum PreferenceUpdate {
    /// All supplied fields were merged and committed.
    Updated(Preference),
    /// No preference exists for the user; nothing was written.
    NotFound,
    /// The preference has no supplement and the patch could not create one
    /// because it lacks this field; nothing was written.
    IncompleteSupplement { missing: &'static str },
}

/// Provides the aggregate writer and reader for user preferences.
pub struct PreferenceRepo;

impl PreferenceRepo {
    // -----------------------------------------------------------------------
    // Writer
    // -----------------------------------------------------------------------

    /// Create a preference with fresh supplement, shoe-type and injury rows.
    ///
    /// A second create for the same `user_id` fails on the
    /// `uq_user_preferences_user_id` constraint and rolls back every insert
    /// made before it.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreatePreference,
    ) -> Result<Preference, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let supplement_id = match &input.supplements {
            Some(supplement) => Some(SupplementRepo::create(&mut tx, supplement).await?.id),
            None => None,
        };
        let shoe_type = ShoeTypeRepo::create(&mut tx, &input.shoe_type).await?;
        let injuries = InjuryProfileRepo::create(&mut tx, &input.injuries).await?;

        let query = format!(
            "INSERT INTO user_preferences \
                 (user_id, supplement_id, shoe_type_id, injury_profile_id, running_surface) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let preference = sqlx::query_as::<_, Preference>(&query)
            .bind(user_id)
            .bind(supplement_id)
            .bind(shoe_type.id)
            .bind(injuries.id)
            .bind(&input.running_surface)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(preference)
    }

    /// Merge a partial update into the aggregate.
    ///
    /// The preference row is locked for the duration of the transaction.
    /// Sub-objects are merged field by field into the rows already
    /// referenced. A supplement patch on a preference without a supplement
    /// creates one, provided the patch carries every field.
    pub async fn update(
        pool: &PgPool,
        user_id: &str,
        input: &UpdatePreference,
    ) -> Result<PreferenceUpdate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(current) = Self::lock_by_user_id(&mut tx, user_id).await? else {
            return Ok(PreferenceUpdate::NotFound);
        };

        let mut new_supplement_id = None;
        if let Some(patch) = &input.supplements {
            match current.supplement_id {
                Some(id) => {
                    SupplementRepo::apply_patch(&mut tx, id, patch).await?;
                }
                None => match patch.complete() {
                    Ok(supplement) => {
                        new_supplement_id =
                            Some(SupplementRepo::create(&mut tx, &supplement).await?.id);
                    }
                    Err(missing) => return Ok(PreferenceUpdate::IncompleteSupplement { missing }),
                },
            }
        }

        if let Some(patch) = &input.shoe_type {
            ShoeTypeRepo::apply_patch(&mut tx, current.shoe_type_id, patch).await?;
        }

        if let Some(patch) = &input.injuries {
            InjuryProfileRepo::apply_patch(&mut tx, current.injury_profile_id, patch).await?;
        }

        let query = format!(
            "UPDATE user_preferences SET \
                 running_surface = COALESCE($2, running_surface), \
                 supplement_id = COALESCE($3, supplement_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let preference = sqlx::query_as::<_, Preference>(&query)
            .bind(current.id)
            .bind(&input.running_surface)
            .bind(new_supplement_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(PreferenceUpdate::Updated(preference))
    }

    /// Delete a preference and the rows it references.
    ///
    /// The preference row goes first because the foreign keys on it are not
    /// deferrable. Returns `false` if no preference exists for the user.
    pub async fn delete(pool: &PgPool, user_id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("DELETE FROM user_preferences WHERE user_id = $1 RETURNING {COLUMNS}");
        let Some(deleted) = sqlx::query_as::<_, Preference>(&query)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(false);
        };

        if let Some(supplement_id) = deleted.supplement_id {
            SupplementRepo::delete(&mut tx, supplement_id).await?;
        }
        ShoeTypeRepo::delete(&mut tx, deleted.shoe_type_id).await?;
        InjuryProfileRepo::delete(&mut tx, deleted.injury_profile_id).await?;

        tx.commit().await?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Reader
    // -----------------------------------------------------------------------

    /// Find the raw preference row for a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<Preference>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1");
        sqlx::query_as::<_, Preference>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user's preference projected with its referenced rows.
    pub async fn find_detail(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<PreferenceDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE p.user_id = $1");
        let row = sqlx::query_as::<_, PreferenceDetailRow>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PreferenceDetail::from))
    }

    /// List every preference projection. Order is unspecified.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<PreferenceDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, PreferenceDetailRow>(DETAIL_SELECT)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(PreferenceDetail::from).collect())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Fetch and row-lock a preference inside an existing transaction.
    async fn lock_by_user_id(
        tx: &mut PgTx<'_>,
        user_id: &str,
    ) -> Result<Option<Preference>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_preferences WHERE user_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Preference>(&query)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }
}
