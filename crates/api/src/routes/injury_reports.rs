use axum::routing::{get, post};
use axum::Router;

use crate::handlers::injury_reports;
use crate::state::AppState;

/// Injury report routes mounted at `/user/injuries`.
///
/// ```text
/// POST /            -> report_injuries
/// GET  /{user_sk}   -> list_injury_reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(injury_reports::report_injuries))
        .route("/{user_sk}", get(injury_reports::list_injury_reports))
}
