use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stride_core::error::CoreError;
use stride_core::payload::{decode, require_fields, require_object};
use stride_core::types::DbId;
use stride_db::models::user::{CreateUser, User};
use stride_db::repositories::UserRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::json_body::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Keys a user create body must contain.
const REQUIRED_FIELDS: &[&str] = &["username", "email"];

/// Body returned after a user is created.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: String,
    pub user_sk: DbId,
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<UserCreated>)> {
    require_fields(require_object(&body)?, REQUIRED_FIELDS, None)?;
    let input: CreateUser = decode(body)?;
    input.validate().map_err(CoreError::from)?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_sk = user.user_sk, username = %user.username, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            message: "User created successfully.".to_string(),
            user_sk: user.user_sk,
        }),
    ))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}
