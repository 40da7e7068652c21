use axum::routing::{get, put};
use axum::Router;

use crate::handlers::user_profiles;
use crate::state::AppState;

/// User profile routes mounted at `/user/profile`.
///
/// ```text
/// GET  /?id=|username=   -> get_profile
/// POST /                 -> create_profile
/// PUT  /update?id=       -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user_profiles::get_profile).post(user_profiles::create_profile),
        )
        .route("/update", put(user_profiles::update_profile))
}
