//! Repository for the `injury_reports` table.

use sqlx::PgPool;
use stride_core::injury_report::{check_entry, unknown_injury, REPORT_SUBMITTED};
use stride_core::types::DbId;

use super::PgTx;
use crate::models::injury_report::{InjuryReport, InjuryReportEntry, InjuryReportOutcome};
use crate::models::preference::InjuryFlags;

/// Column list for `injury_reports` queries.
const COLUMNS: &str = "id, user_sk, injury_profile_id, injury_location, reported_at";

/// Provides data access for injury reports.
pub struct InjuryReportRepo;

impl InjuryReportRepo {
    /// Record every usable entry for `user_sk` in one transaction.
    ///
    /// Returns one outcome per entry, in request order. Entries that are
    /// incomplete or name an unknown injury profile are reported as
    /// rejected and skipped; a storage error aborts the whole batch.
    pub async fn create_batch(
        pool: &PgPool,
        user_sk: DbId,
        entries: &[InjuryReportEntry],
    ) -> Result<Vec<InjuryReportOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut outcomes = Vec::with_capacity(entries.len());

        for entry in entries {
            let (injury_id, location) =
                match check_entry(entry.injury_id, entry.injury_location.as_deref()) {
                    Ok(checked) => checked,
                    Err(error) => {
                        outcomes.push(InjuryReportOutcome::Rejected { error });
                        continue;
                    }
                };

            let Some(flags) = Self::injury_flags(&mut tx, injury_id).await? else {
                outcomes.push(InjuryReportOutcome::Rejected {
                    error: unknown_injury(injury_id),
                });
                continue;
            };

            let query = "INSERT INTO injury_reports (user_sk, injury_profile_id, injury_location) \
                         VALUES ($1, $2, $3)";
            sqlx::query(query)
                .bind(user_sk)
                .bind(injury_id)
                .bind(location)
                .execute(&mut *tx)
                .await?;

            outcomes.push(InjuryReportOutcome::Reported {
                injury_id,
                injury_location: location.to_string(),
                injury_type: flags,
                status: REPORT_SUBMITTED,
            });
        }

        tx.commit().await?;
        Ok(outcomes)
    }

    /// A user's injury reports, newest first.
    pub async fn list_by_user(pool: &PgPool, user_sk: DbId) -> Result<Vec<InjuryReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM injury_reports \
             WHERE user_sk = $1 \
             ORDER BY reported_at DESC, id DESC"
        );
        sqlx::query_as::<_, InjuryReport>(&query)
            .bind(user_sk)
            .fetch_all(pool)
            .await
    }

    async fn injury_flags(tx: &mut PgTx<'_>, id: DbId) -> Result<Option<InjuryFlags>, sqlx::Error> {
        sqlx::query_as::<_, InjuryFlags>(
            "SELECT tennis_elbow, muscle_strain, bicep_tendonitis, fracture, forearm_strain \
             FROM injury_profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
    }
}
