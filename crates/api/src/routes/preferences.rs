//! Route definitions for user preferences.

use axum::routing::get;
use axum::Router;

use crate::handlers::preferences;
use crate::state::AppState;

/// Preference routes mounted at `/user/preferences`.
///
/// ```text
/// GET    /            -> list_preferences
/// GET    /{user_id}   -> get_preference
/// POST   /{user_id}   -> create_preference
/// PUT    /{user_id}   -> update_preference
/// DELETE /{user_id}   -> delete_preference
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(preferences::list_preferences))
        .route(
            "/{user_id}",
            get(preferences::get_preference)
                .post(preferences::create_preference)
                .put(preferences::update_preference)
                .delete(preferences::delete_preference),
        )
}
