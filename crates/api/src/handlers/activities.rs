//! Handlers for activity logs.
//!
//! Activities belong to a row in `users`; an unknown athlete is a bad
//! request rather than a missing resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stride_core::activity;
use stride_core::error::CoreError;
use stride_core::payload::decode;
use stride_core::types::DbId;
use stride_db::models::activity::{Activity, CreateActivity};
use stride_db::repositories::ActivityRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::ensure_athlete_exists;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::PathParam;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Body returned after an activity is created.
#[derive(Debug, Serialize)]
pub struct ActivityCreated {
    pub message: String,
    pub activity_id: DbId,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply the numeric bounds serde cannot express.
fn validate_metrics(input: &CreateActivity) -> Result<(), CoreError> {
    let metrics = [
        ("distance", input.distance),
        ("total_elevation_gain", input.total_elevation_gain),
        ("calories", input.calories),
    ];
    for (field, value) in metrics {
        if let Some(value) = value {
            activity::validate_non_negative(field, value)?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /activity
pub async fn list_activities(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Activity>>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// GET /activity/athletes/{athlete_id}
pub async fn list_athlete_activities(
    State(state): State<AppState>,
    PathParam(athlete_id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<Activity>>>> {
    ensure_athlete_exists(&state.pool, athlete_id).await?;
    let activities = ActivityRepo::list_by_athlete(&state.pool, athlete_id).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// POST /activity/athletes/{athlete_id}
pub async fn create_activity(
    State(state): State<AppState>,
    PathParam(athlete_id): PathParam<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<ActivityCreated>)> {
    activity::validate_create_payload(&body)?;
    let input: CreateActivity = decode(body)?;
    input.validate().map_err(CoreError::from)?;
    validate_metrics(&input)?;

    ensure_athlete_exists(&state.pool, athlete_id).await?;
    let created = ActivityRepo::create(&state.pool, athlete_id, &input).await?;

    tracing::info!(
        activity_id = created.activity_id,
        athlete_id,
        activity_type = %created.activity_type,
        "Activity created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ActivityCreated {
            message: format!("New activity named '{}' created successfully.", created.name),
            activity_id: created.activity_id,
        }),
    ))
}

/// GET /activity/{activity_id}
pub async fn get_activity(
    State(state): State<AppState>,
    PathParam(activity_id): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Activity>>> {
    let activity = ActivityRepo::find_by_id(&state.pool, activity_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Activity", activity_id))?;
    Ok(Json(DataResponse { data: activity }))
}

/// DELETE /activity/{activity_id}
pub async fn delete_activity(
    State(state): State<AppState>,
    PathParam(activity_id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ActivityRepo::delete(&state.pool, activity_id).await? {
        return Err(CoreError::not_found("Activity", activity_id).into());
    }

    tracing::info!(activity_id, "Activity deleted");
    Ok(Json(MessageResponse::new("Activity deleted successfully.")))
}
