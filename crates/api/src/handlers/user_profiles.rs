//! Handlers for user profiles.
//!
//! Profiles are looked up by `?id=` or `?username=`. Passwords are checked
//! for strength and stored as Argon2id hashes; responses never include them.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stride_core::error::CoreError;
use stride_core::payload::decode;
use stride_core::user_profile;
use stride_db::models::user_profile::{CreateUserProfile, UpdateUserProfile, UserProfile};
use stride_db::repositories::UserProfileRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::AppResult;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::QueryParams;
use crate::query::{ProfileId, ProfileLookup};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /user/profile?id=|username=
///
/// `id` wins when both are given.
pub async fn get_profile(
    State(state): State<AppState>,
    QueryParams(lookup): QueryParams<ProfileLookup>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let profile = match (lookup.id, lookup.username.as_deref()) {
        (Some(id), _) => UserProfileRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("UserProfile", id))?,
        (None, Some(username)) if !username.is_empty() => {
            UserProfileRepo::find_by_username(&state.pool, username)
                .await?
                .ok_or_else(|| CoreError::not_found("UserProfile", username))?
        }
        _ => {
            return Err(CoreError::Validation(
                "Please provide either 'id' or 'username' as a query parameter.".to_string(),
            )
            .into())
        }
    };
    Ok(Json(DataResponse { data: profile }))
}

/// POST /user/profile
pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(mut body): JsonBody,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    user_profile::prepare_create_payload(&mut body)?;
    let input: CreateUserProfile = decode(body)?;
    input.validate().map_err(CoreError::from)?;
    user_profile::validate_password(&input.password)?;
    if let Some(mobile_no) = &input.mobile_no {
        user_profile::validate_mobile_no(mobile_no)?;
    }

    if UserProfileRepo::username_taken(&state.pool, &input.username, None).await? {
        return Err(CoreError::Validation("Username already exists".to_string()).into());
    }
    if UserProfileRepo::email_taken(&state.pool, &input.email_id).await? {
        return Err(CoreError::Validation("Email already exists".to_string()).into());
    }

    let password_hash = hash_password(&input.password)?;
    let profile = UserProfileRepo::create(&state.pool, &input, &password_hash).await?;

    tracing::info!(id = profile.id, username = %profile.username, "User profile created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User profile created successfully")),
    ))
}

/// PUT /user/profile/update?id=
pub async fn update_profile(
    State(state): State<AppState>,
    QueryParams(ProfileId { id }): QueryParams<ProfileId>,
    JsonBody(mut body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    if UserProfileRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found("UserProfile", id).into());
    }

    user_profile::prepare_update_payload(&mut body)?;
    let input: UpdateUserProfile = decode(body)?;
    input.validate().map_err(CoreError::from)?;
    if let Some(password) = &input.password {
        user_profile::validate_password(password)?;
    }
    if let Some(mobile_no) = &input.mobile_no {
        user_profile::validate_mobile_no(mobile_no)?;
    }

    if let Some(username) = &input.username {
        if UserProfileRepo::username_taken(&state.pool, username, Some(id)).await? {
            return Err(CoreError::Validation("Username already exists".to_string()).into());
        }
    }

    let password_hash = input.password.as_deref().map(hash_password).transpose()?;
    let profile = UserProfileRepo::update(&state.pool, id, &input, password_hash.as_deref())
        .await?
        .ok_or_else(|| CoreError::not_found("UserProfile", id))?;

    tracing::info!(id = profile.id, "User profile updated");
    Ok(Json(MessageResponse::new("User profile updated successfully")))
}
