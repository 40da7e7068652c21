//! Handlers for the preference aggregate.
//!
//! Each write checks the body shape first (naming the first missing field),
//! then decodes and validates the typed DTO, and only then touches storage.

use axum::extract::State;
use axum::Json;
use stride_core::error::CoreError;
use stride_core::payload::decode;
use stride_core::preferences;
use stride_db::models::preference::{CreatePreference, PreferenceDetail, UpdatePreference};
use stride_db::repositories::{PreferenceRepo, PreferenceUpdate};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::PathParam;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /user/preferences/{user_id}
///
/// Creates the preference together with its supplement, shoe-type and
/// injury rows. A second create for the same user fails with a persistence
/// error and leaves nothing behind.
pub async fn create_preference(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    preferences::validate_user_id(&user_id)?;
    preferences::validate_create_payload(&body)?;
    let input: CreatePreference = decode(body)?;
    input.validate().map_err(CoreError::from)?;

    let preference = PreferenceRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(
        user_id = %preference.user_id,
        preference_id = preference.id,
        has_supplement = preference.supplement_id.is_some(),
        "Preferences created",
    );

    Ok(Json(MessageResponse::new("Preferences saved successfully.")))
}

/// GET /user/preferences/{user_id}
pub async fn get_preference(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<String>,
) -> AppResult<Json<DataResponse<PreferenceDetail>>> {
    let detail = PreferenceRepo::find_detail(&state.pool, &user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Preference", &user_id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /user/preferences
///
/// An empty table yields an empty list.
pub async fn list_preferences(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PreferenceDetail>>>> {
    let details = PreferenceRepo::list_details(&state.pool).await?;
    Ok(Json(DataResponse { data: details }))
}

/// PUT /user/preferences/{user_id}
///
/// Merges the supplied keys into the existing aggregate. A supplement patch
/// on a preference without one must carry all three product fields.
pub async fn update_preference(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    preferences::validate_user_id(&user_id)?;
    preferences::validate_update_payload(&body)?;
    let input: UpdatePreference = decode(body)?;
    input.validate().map_err(CoreError::from)?;

    match PreferenceRepo::update(&state.pool, &user_id, &input).await? {
        PreferenceUpdate::Updated(preference) => {
            tracing::info!(
                user_id = %preference.user_id,
                preference_id = preference.id,
                "Preferences updated",
            );
            Ok(Json(MessageResponse::new("Preferences updated successfully.")))
        }
        PreferenceUpdate::NotFound => Err(CoreError::not_found("Preference", &user_id).into()),
        PreferenceUpdate::IncompleteSupplement { missing } => Err(CoreError::Validation(format!(
            "Missing required field: supplements.{missing}"
        ))
        .into()),
    }
}

/// DELETE /user/preferences/{user_id}
///
/// Removes the preference and every row it references.
pub async fn delete_preference(
    State(state): State<AppState>,
    PathParam(user_id): PathParam<String>,
) -> AppResult<Json<MessageResponse>> {
    if !PreferenceRepo::delete(&state.pool, &user_id).await? {
        return Err(CoreError::not_found("Preference", &user_id).into());
    }

    tracing::info!(user_id = %user_id, "Preferences deleted");
    Ok(Json(MessageResponse::new("Preferences deleted successfully.")))
}
