//! Handlers for the supplement intake log.

use axum::extract::State;
use axum::Json;
use stride_core::error::CoreError;
use stride_core::payload::decode;
use stride_core::supplement_log;
use stride_core::types::DbId;
use stride_db::models::supplement_log::{
    CreateSupplementLog, SupplementLog, UpdateSupplementLog,
};
use stride_db::repositories::SupplementLogRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::ensure_athlete_exists;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::PathParam;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /user/supplements
pub async fn list_supplement_logs(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SupplementLog>>>> {
    let logs = SupplementLogRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// GET /user/supplements/athletes/{athlete_id}
pub async fn list_user_supplement_logs(
    State(state): State<AppState>,
    PathParam(athlete_id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<SupplementLog>>>> {
    ensure_athlete_exists(&state.pool, athlete_id).await?;
    let logs = SupplementLogRepo::list_by_user(&state.pool, athlete_id).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// POST /user/supplements/athletes/{athlete_id}
pub async fn create_supplement_log(
    State(state): State<AppState>,
    PathParam(athlete_id): PathParam<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    supplement_log::validate_create_payload(&body)?;
    let input: CreateSupplementLog = decode(body)?;
    input.validate().map_err(CoreError::from)?;
    supplement_log::validate_dosage(input.dosage)?;
    supplement_log::validate_frequency(input.frequency)?;

    ensure_athlete_exists(&state.pool, athlete_id).await?;
    let log = SupplementLogRepo::create(&state.pool, athlete_id, &input).await?;

    tracing::info!(id = log.id, user_sk = log.user_sk, name = %log.name, "Supplement intake recorded");
    Ok(Json(MessageResponse::new("Supplement added successfully.")))
}

/// PUT /user/supplements/{id}
///
/// Only the four intake fields may be changed; any other key is rejected.
pub async fn update_supplement_log(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<MessageResponse>> {
    supplement_log::validate_update_payload(&body)?;
    let input: UpdateSupplementLog = decode(body)?;
    input.validate().map_err(CoreError::from)?;
    if let Some(dosage) = input.dosage {
        supplement_log::validate_dosage(dosage)?;
    }
    if let Some(frequency) = input.frequency {
        supplement_log::validate_frequency(frequency)?;
    }

    let log = SupplementLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("SupplementLog", id))?;

    tracing::info!(id = log.id, user_sk = log.user_sk, "Supplement intake updated");
    Ok(Json(MessageResponse::new("Supplement updated successfully.")))
}

/// DELETE /user/supplements/{id}
pub async fn delete_supplement_log(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !SupplementLogRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("SupplementLog", id).into());
    }

    tracing::info!(id, "Supplement intake deleted");
    Ok(Json(MessageResponse::new("Supplement deleted successfully.")))
}
