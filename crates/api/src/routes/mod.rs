pub mod activities;
pub mod health;
pub mod hydration;
pub mod injury_reports;
pub mod preferences;
pub mod supplement_logs;
pub mod user_profiles;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                      list, create
///
/// /user/preferences                           list all preference projections
/// /user/preferences/{user_id}                 get, create, update, delete
///
/// /user/supplements                           list all intake logs
/// /user/supplements/athletes/{athlete_id}     list for user, record intake
/// /user/supplements/{id}                      update, delete
///
/// /user/hydration                             log water intake (POST)
/// /user/hydration/{user_sk}                   hydration history
///
/// /user/injuries                              report injuries (POST)
/// /user/injuries/{user_sk}                    injury report history
///
/// /user/profile?id=|username=                 get, create (POST)
/// /user/profile/update?id=                    update (PUT)
///
/// /activity                                   list all activities
/// /activity/athletes/{athlete_id}             list for athlete, create
/// /activity/{activity_id}                     get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/user/preferences", preferences::router())
        .nest("/user/supplements", supplement_logs::router())
        .nest("/user/hydration", hydration::router())
        .nest("/user/injuries", injury_reports::router())
        .nest("/user/profile", user_profiles::router())
        .nest("/activity", activities::router())
}
