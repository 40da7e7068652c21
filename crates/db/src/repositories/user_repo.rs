//! Repository for the `users` table.

use sqlx::PgPool;
use stride_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list for `users` queries.
const COLUMNS: &str = "user_sk, username, email, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by surrogate key.
    pub async fn find_by_id(pool: &PgPool, user_sk: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_sk = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_sk)
            .fetch_optional(pool)
            .await
    }

    /// Whether a user with this key exists.
    pub async fn exists(pool: &PgPool, user_sk: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE user_sk = $1)")
            .bind(user_sk)
            .fetch_one(pool)
            .await
    }

    /// List all users, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_sk");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
