use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hydration;
use crate::state::AppState;

/// Hydration routes mounted at `/user/hydration`.
///
/// ```text
/// POST /            -> log_hydration
/// GET  /{user_sk}   -> list_hydration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(hydration::log_hydration))
        .route("/{user_sk}", get(hydration::list_hydration))
}
