//! Hydration log model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stride_core::types::{DbId, Timestamp};

/// A row from the `hydration_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HydrationLog {
    pub id: DbId,
    pub user_sk: DbId,
    /// Millilitres of water.
    pub quantity: i32,
    pub logged_at: Timestamp,
}

/// DTO for logging a water intake.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHydrationLog {
    pub user_sk: DbId,
    pub quantity: i32,
}
