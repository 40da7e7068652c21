//! Query-string parameter types for API handlers.

use serde::Deserialize;
use stride_core::types::DbId;

/// `?id=` or `?username=` selecting a single user profile.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileLookup {
    pub id: Option<DbId>,
    pub username: Option<String>,
}

/// `?id=` selecting the profile to update.
#[derive(Debug, Deserialize)]
pub struct ProfileId {
    pub id: DbId,
}
