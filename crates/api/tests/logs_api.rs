//! HTTP-level integration tests for users, activities, supplement intake
//! logs and hydration logs.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_returns_201_and_lists(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/users",
        json!({"username": "ana", "email": "ana@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["user_sk"].is_number());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/users").await).await;
    assert_eq!(json["data"][0]["username"], "ana");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_with_bad_email_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        json!({"username": "ana", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_lifecycle(pool: PgPool) {
    let athlete = create_user(&pool, "runner").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/activity/athletes/{athlete}"),
        json!({"name": "Morning run", "type": "run", "description": "easy", "distance": 5.2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "New activity named 'Morning run' created successfully."
    );
    let activity_id = json["activity_id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let data = body_json(get(app, &format!("/api/v1/activity/{activity_id}")).await).await["data"].clone();
    assert_eq!(data["type"], "run");
    assert_eq!(data["distance"], 5.2);
    assert_eq!(data["moving_time"], 0);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/activity/athletes/{athlete}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/activity/{activity_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/activity/{activity_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_for_unknown_athlete_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/activity/athletes/999999",
        json!({"name": "Ghost run", "type": "run", "description": "?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid athlete ID");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/activity/athletes/999999").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_with_unknown_type_is_rejected(pool: PgPool) {
    let athlete = create_user(&pool, "skater").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/activity/athletes/{athlete}"),
        json!({"name": "Rink", "type": "skate", "description": "laps"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    assert_eq!(
        body_json(get(app, "/api/v1/activity").await).await["data"],
        json!([])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_ids_in_the_path_are_validation_errors(pool: PgPool) {
    for uri in [
        "/api/v1/activity/abc",
        "/api/v1/activity/athletes/abc",
        "/api/v1/user/supplements/athletes/1.5",
        "/api/v1/user/hydration/abc",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{uri}");
        assert!(
            json["error"].as_str().unwrap().starts_with("Invalid path parameter"),
            "{uri}"
        );
    }

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/user/supplements/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Supplement intake logs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplement_log_lifecycle(pool: PgPool) {
    let user = create_user(&pool, "lifter").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/user/supplements/athletes/{user}"),
        json!({"name": "Creatine", "dosage": 5.0, "frequency": 1, "purpose": ["strength"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/user/supplements/athletes/{user}")).await).await;
    let log = json["data"][0].clone();
    assert_eq!(log["name"], "Creatine");
    assert_eq!(log["purpose"], json!(["strength"]));
    let id = log["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/v1/user/supplements/{id}"), json!({"dosage": 3.0})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/user/supplements").await).await;
    assert_eq!(json["data"][0]["dosage"], 3.0);
    assert_eq!(json["data"][0]["name"], "Creatine");

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/user/supplements/{id}")).await.status(),
        StatusCode::OK
    );

    let app = common::build_test_app(pool);
    assert_eq!(
        delete(app, &format!("/api/v1/user/supplements/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplement_log_update_rejects_unknown_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/user/supplements/1", json!({"brand": "Acme"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .starts_with("Unknown field 'brand'"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplement_log_update_on_missing_row_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/user/supplements/424242", json!({"frequency": 2})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Hydration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn hydration_is_logged_and_listed(pool: PgPool) {
    let user = create_user(&pool, "swimmer").await;

    for quantity in [250, 500] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/user/hydration",
            json!({"user_sk": user, "quantity": quantity}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["quantity"], quantity);
        assert_eq!(json["user_sk"], user);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/user/hydration/{user}")).await).await;
    let quantities: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["quantity"].as_i64().unwrap())
        .collect();
    assert_eq!(quantities, vec![500, 250]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hydration_rejects_non_positive_quantity(pool: PgPool) {
    let user = create_user(&pool, "dry").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/user/hydration",
        json!({"user_sk": user, "quantity": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "'quantity' must be a positive integer"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hydration_for_unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/user/hydration",
        json!({"user_sk": 999999, "quantity": 250}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
