//! HTTP-level integration tests for the `/usuarios` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_context(pool: &PgPool, name: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/contextos", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

fn user_body(name: &str, context_ids: &[&str]) -> serde_json::Value {
    json!({
        "name": name,
        "full_name": format!("{name} Example"),
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "555-0100",
        "password_hash": "$argon2id$placeholder",
        "context_ids": context_ids,
    })
}

async fn create_user(pool: &PgPool, name: &str, context_ids: &[&str]) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/usuarios", user_body(name, context_ids)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn context_names(user: &serde_json::Value) -> Vec<String> {
    user["contexts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_returns_201_without_password_hash(pool: PgPool) {
    let sales = create_context(&pool, "Sales").await;
    let admin = create_context(&pool, "Admin").await;

    let json = create_user(&pool, "Ana", &[&sales, &admin]).await;

    assert_eq!(json["name"], "Ana");
    assert_eq!(json["email"], "ana@example.com");
    assert_eq!(json["is_active"], true);
    assert!(json.get("password_hash").is_none());
    assert!(json.get("is_deleted").is_none());
    assert_eq!(context_names(&json), vec!["Admin", "Sales"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_without_contexts_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/usuarios", user_body("Ana", &[])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/usuarios").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_with_unknown_context_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/usuarios",
        user_body("Ana", &["00000000-0000-4000-8000-000000000000"]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("00000000-0000-4000-8000-000000000000"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    create_user(&pool, "Ana", &[&ctx]).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/usuarios", user_body("Ana", &[&ctx])).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_email_returns_400(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    let mut body = user_body("Ana", &[&ctx]);
    body["email"] = json!("not-an-email");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/usuarios", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_phone_only_keeps_other_fields(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    let created = create_user(&pool, "Ana", &[&ctx]).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/usuarios/{id}"),
        json!({ "phone": "555-9999" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["phone"], "555-9999");
    assert_eq!(json["name"], created["name"]);
    assert_eq!(json["email"], created["email"]);
    assert_eq!(json["is_active"], created["is_active"]);
    assert_eq!(json["contexts"], created["contexts"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_phone_clears_it(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    let created = create_user(&pool, "Ana", &[&ctx]).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/usuarios/{id}"),
        json!({ "phone": null, "name": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["phone"].is_null());
    assert_eq!(json["name"], "Ana");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_context_set(pool: PgPool) {
    let c1 = create_context(&pool, "C1").await;
    let c2 = create_context(&pool, "C2").await;
    let c3 = create_context(&pool, "C3").await;
    let created = create_user(&pool, "Ana", &[&c1, &c2]).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/usuarios/{id}"),
        json!({ "context_ids": [c2, c3] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(context_names(&body_json(response).await), vec!["C2", "C3"]);

    // An empty list leaves the set alone.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/usuarios/{id}"),
        json!({ "context_ids": [] }),
    )
    .await;
    assert_eq!(context_names(&body_json(response).await), vec!["C2", "C3"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/usuarios/00000000-0000-4000-8000-000000000000",
        json!({ "name": "Nobody" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_user_returns_204_and_hides_it(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    let created = create_user(&pool, "Ana", &[&ctx]).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/usuarios/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/usuarios/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/usuarios").await;
    assert_eq!(body_json(response).await, json!([]));

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/usuarios/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// List & search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_users_default_page(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    create_user(&pool, "Bob", &[&ctx]).await;
    create_user(&pool, "Ana", &[&ctx]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/usuarios").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Bob"]);
    assert_eq!(json[0]["contexts"][0]["name"], "Team");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_users_excludes_deleted(pool: PgPool) {
    let ctx = create_context(&pool, "Team").await;
    create_user(&pool, "Anna", &[&ctx]).await;
    create_user(&pool, "Joanna", &[&ctx]).await;
    let gone = create_user(&pool, "Hannah", &[&ctx]).await;
    let gone_id = gone["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/usuarios/{gone_id}")).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/usuarios/nome/ann?limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Anna", "Joanna"]);
}
