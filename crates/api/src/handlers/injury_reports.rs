//! Handlers for injury reports.
//!
//! A report request is accepted as long as the body is well formed and the
//! user exists; each listed injury then succeeds or fails on its own and the
//! response carries one outcome per entry.

use axum::extract::State;
use axum::Json;
use stride_core::error::CoreError;
use stride_core::injury_report;
use stride_core::payload::decode;
use stride_core::types::DbId;
use stride_db::models::injury_report::{CreateInjuryReports, InjuryReport, InjuryReportOutcome};
use stride_db::repositories::{InjuryReportRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::json_body::JsonBody;
use crate::middleware::params::PathParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /user/injuries
pub async fn report_injuries(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<DataResponse<Vec<InjuryReportOutcome>>>> {
    injury_report::validate_report_payload(&body)?;
    let input: CreateInjuryReports = decode(body)?;

    if !UserRepo::exists(&state.pool, input.user_sk).await? {
        return Err(CoreError::not_found("User", input.user_sk).into());
    }

    let outcomes = InjuryReportRepo::create_batch(&state.pool, input.user_sk, &input.injuries).await?;
    let reported = outcomes.iter().filter(|o| o.is_reported()).count();

    tracing::info!(
        user_sk = input.user_sk,
        reported,
        rejected = outcomes.len() - reported,
        "Injury reports recorded",
    );

    Ok(Json(DataResponse { data: outcomes }))
}

/// GET /user/injuries/{user_sk}
///
/// Newest reports first.
pub async fn list_injury_reports(
    State(state): State<AppState>,
    PathParam(user_sk): PathParam<DbId>,
) -> AppResult<Json<DataResponse<Vec<InjuryReport>>>> {
    if !UserRepo::exists(&state.pool, user_sk).await? {
        return Err(CoreError::not_found("User", user_sk).into());
    }
    let reports = InjuryReportRepo::list_by_user(&state.pool, user_sk).await?;
    Ok(Json(DataResponse { data: reports }))
}
