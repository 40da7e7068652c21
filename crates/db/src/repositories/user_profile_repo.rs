//! Repository for the `user_profiles` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use crate::models::user_profile::{CreateUserProfile, UpdateUserProfile, UserProfile};

/// Column list for `user_profiles` queries.
const COLUMNS: &str = "\
    id, username, email_id, password_hash, gender, date_of_birth, height, \
    weight, experience_level, distance_goal, preferences, mobile_no, \
    created_at, updated_at";

/// Provides CRUD operations for user profiles.
pub struct UserProfileRepo;

impl UserProfileRepo {
    /// Insert a profile with an already hashed password.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserProfile,
        password_hash: &str,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles \
                 (username, email_id, password_hash, gender, date_of_birth, height, \
                  weight, experience_level, distance_goal, preferences, mobile_no) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(&input.username)
            .bind(&input.email_id)
            .bind(password_hash)
            .bind(&input.gender)
            .bind(input.date_of_birth)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.experience_level)
            .bind(input.distance_goal)
            .bind(&input.preferences)
            .bind(&input.mobile_no)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE username = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Whether another profile already uses `username`. `exclude_id` skips
    /// the profile being updated.
    pub async fn username_taken(
        pool: &PgPool,
        username: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_profiles \
             WHERE username = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(username)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    pub async fn email_taken(pool: &PgPool, email_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM user_profiles WHERE email_id = $1)")
            .bind(email_id)
            .fetch_one(pool)
            .await
    }

    /// Merge a partial update. Returns `None` if no profile has this id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserProfile,
        password_hash: Option<&str>,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles SET \
                 username = COALESCE($2, username), \
                 password_hash = COALESCE($3, password_hash), \
                 height = COALESCE($4, height), \
                 weight = COALESCE($5, weight), \
                 experience_level = COALESCE($6, experience_level), \
                 distance_goal = COALESCE($7, distance_goal), \
                 preferences = COALESCE($8, preferences), \
                 mobile_no = COALESCE($9, mobile_no) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(password_hash)
            .bind(input.height)
            .bind(input.weight)
            .bind(&input.experience_level)
            .bind(input.distance_goal)
            .bind(&input.preferences)
            .bind(&input.mobile_no)
            .fetch_optional(pool)
            .await
    }
}
