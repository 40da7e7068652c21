//! Injury report model, request DTOs and per-entry outcome.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};

use super::preference::InjuryFlags;

/// A row from the `injury_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InjuryReport {
    pub id: DbId,
    pub user_sk: DbId,
    pub injury_profile_id: DbId,
    pub injury_location: String,
    pub reported_at: Timestamp,
}

/// One entry of a report request. Both fields are checked per entry, so
/// neither is required at decode time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InjuryReportEntry {
    #[serde(default)]
    pub injury_id: Option<DbId>,
    #[serde(default)]
    pub injury_location: Option<String>,
}

/// DTO for reporting one or more injuries for a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInjuryReports {
    pub user_sk: DbId,
    pub injuries: Vec<InjuryReportEntry>,
}

/// What happened to one entry of a report request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InjuryReportOutcome {
    Reported {
        injury_id: DbId,
        injury_location: String,
        injury_type: InjuryFlags,
        status: &'static str,
    },
    Rejected {
        error: String,
    },
}

impl InjuryReportOutcome {
    pub fn is_reported(&self) -> bool {
        matches!(self, InjuryReportOutcome::Reported { .. })
    }
}
