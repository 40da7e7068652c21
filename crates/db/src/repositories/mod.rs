//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories for rows owned
//! by the preference aggregate take an open transaction instead, so the
//! aggregate can compose them into a single unit of work.

pub mod activity_repo;
pub mod hydration_repo;
pub mod injury_profile_repo;
pub mod injury_report_repo;
pub mod preference_repo;
pub mod shoe_type_repo;
pub mod supplement_log_repo;
pub mod supplement_repo;
pub mod user_profile_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepo;
pub use hydration_repo::HydrationRepo;
pub use injury_profile_repo::InjuryProfileRepo;
pub use injury_report_repo::InjuryReportRepo;
pub use preference_repo::{PreferenceRepo, PreferenceUpdate};
pub use shoe_type_repo::ShoeTypeRepo;
pub use supplement_log_repo::SupplementLogRepo;
pub use supplement_repo::SupplementRepo;
pub use user_profile_repo::UserProfileRepo;
pub use user_repo::UserRepo;

/// An open Postgres transaction.
pub type PgTx<'c> = sqlx::Transaction<'c, sqlx::Postgres>;
