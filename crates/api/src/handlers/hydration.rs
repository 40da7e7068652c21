use axum::extract::State;
use axum::Json;
use serde::Serialize;
use stride_core::error::CoreError;
use stride_core::hydration;
use stride_core::payload::decode;
use stride_core::types::DbId;
use stride_db::models::hydration::{CreateHydrationLog, HydrationLog};
use stride_db::repositories::{HydrationRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::PathParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body returned after a water intake is logged.
#[derive(Debug, Serialize)]
pub struct HydrationLogged {
    pub message: String,
    pub user_sk: DbId,
    pub quantity: i32,
}

/// POST /user/hydration
pub async fn log_hydration(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<HydrationLogged>> {
    hydration::validate_create_payload(&body)?;
    let input: CreateHydrationLog = decode(body)?;
    hydration::validate_quantity(input.quantity)?;

    if !UserRepo::exists(&state.pool, input.user_sk).await? {
        return Err(CoreError::not_found("User", input.user_sk).into());
    }
    let log = HydrationRepo::create(&state.pool, &input).await?;

    tracing::info!(id = log.id, user_sk = log.user_sk, quantity = log.quantity, "Water intake logged");

    Ok(Json(HydrationLogged {
        message: "Water intake logged successfully.".to_string(),
        user_sk: log.user_sk,
        quantity: log.quantity,
    }))
}

/// GET /user/hydration/{user_sk}
///
/// Newest entries first.
pub async fn list_hydration(
    State(state): State<AppState>,
    PathParam(user_sk): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<HydrationLog>>>> {
    if !UserRepo::exists(&state.pool, user_sk).await? {
        return Err(CoreError::not_found("User", user_sk).into());
    }
    let logs = HydrationRepo::list_by_user(&state.pool, user_sk).await?;
    Ok(Json(DataResponse { data: logs }))
}
