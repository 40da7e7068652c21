//! Route definitions for activity logs.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity routes mounted at `/activity`.
///
/// ```text
/// GET    /                        -> list_activities
/// GET    /athletes/{athlete_id}   -> list_athlete_activities
/// POST   /athletes/{athlete_id}   -> create_activity
/// GET    /{activity_id}           -> get_activity
/// DELETE /{activity_id}           -> delete_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activities::list_activities))
        .route(
            "/athletes/{athlete_id}",
            get(activities::list_athlete_activities).post(activities::create_activity),
        )
        .route(
            "/{activity_id}",
            get(activities::get_activity).delete(activities::delete_activity),
        )
}
