use axum::routing::{get, put};
use axum::Router;

use crate::handlers::supplement_logs;
use crate::state::AppState;

/// Supplement intake log routes mounted at `/user/supplements`.
///
/// ```text
/// GET    /                        -> list_supplement_logs
/// GET    /athletes/{athlete_id}   -> list_user_supplement_logs
/// POST   /athletes/{athlete_id}   -> create_supplement_log
/// PUT    /{id}                    -> update_supplement_log
/// DELETE /{id}                    -> delete_supplement_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(supplement_logs::list_supplement_logs))
        .route(
            "/athletes/{athlete_id}",
            get(supplement_logs::list_user_supplement_logs)
                .post(supplement_logs::create_supplement_log),
        )
        .route(
            "/{id}",
            put(supplement_logs::update_supplement_log)
                .delete(supplement_logs::delete_supplement_log),
        )
}
