//! HTTP-level tests for registration, login, token refresh, logout, `me`,
//! and account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_form, post_json, post_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PASSWORD: &str = "kibble-and-yarn";

async fn register(app: &axum::Router, username: &str) -> Value {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({
            "username": username,
            "email": format!("{username}@pet.chat"),
            "password": PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn login(app: &axum::Router, username: &str, password: &str) -> axum::response::Response {
    post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "username": username, "password": password }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_returns_public_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = register(&app, "mika").await;

    assert_eq!(user["username"], "mika");
    assert_eq!(user["email"], "mika@pet.chat");
    assert_eq!(user["role"], "user");
    assert_eq!(user["is_active"], true);
    assert!(user.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_rejects_duplicates_and_weak_passwords(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "mika").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "username": "mika", "email": "other@pet.chat", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "username": "other", "email": "mika@pet.chat", "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        json!({ "username": "shorty", "email": "shorty@pet.chat", "password": "1234567" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login / me / refresh / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_and_me(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = register(&app, "hana").await;

    let response = login(&app, "hana", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let tokens = body_json(response).await;
    assert_eq!(tokens["token_type"], "bearer");
    assert_eq!(tokens["expires_in"], 30 * 60);
    assert!(tokens["refresh_token"].is_string());
    assert_eq!(tokens["user"]["id"], user["id"]);

    let access = tokens["access_token"].as_str().unwrap();
    let response = get_auth(app.clone(), "/api/v1/auth/me", access).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["username"], "hana");
    assert!(me["last_login_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_accepts_password_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "form-user").await;

    let response = post_form(
        app.clone(),
        "/api/v1/auth/login",
        &format!("grant_type=password&username=form-user&password={PASSWORD}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let tokens = body_json(response).await;
    assert_eq!(tokens["token_type"], "bearer");
    assert_eq!(tokens["user"]["username"], "form-user");

    let access = tokens["access_token"].as_str().unwrap();
    let response = get_auth(app.clone(), "/api/v1/auth/me", access).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(
        app.clone(),
        "/api/v1/auth/login",
        "username=form-user&password=nope-nope",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_form(app, "/api/v1/auth/login", "username=form-user").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_requires_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/api/v1/auth/me", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_password_and_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "sora").await;

    assert_eq!(
        login(&app, "sora", "wrong-password").await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        login(&app, "nobody", PASSWORD).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "kai").await;
    let tokens = body_json(login(&app, "kai", PASSWORD).await).await;
    let old_refresh = tokens["refresh_token"].clone();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"], old_refresh);

    // The old token was revoked by the rotation.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_refresh_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(&app, "ren").await;
    let tokens = body_json(login(&app, "ren", PASSWORD).await).await;
    let access = tokens["access_token"].as_str().unwrap();

    let response = post_json_auth(app.clone(), "/api/v1/auth/logout", json!({}), access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": tokens["refresh_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(app.clone(), "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Lockout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_account_locks_after_five_failures(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(&app, "yuki").await;

    for _ in 0..5 {
        assert_eq!(
            login(&app, "yuki", "wrong-password").await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    // Even the right password is refused while locked.
    let response = login(&app, "yuki", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let (locked,): (bool,) =
        sqlx::query_as("SELECT locked_until > NOW() FROM users WHERE username = 'yuki'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(locked);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_successful_login_resets_failures(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(&app, "nao").await;

    for _ in 0..4 {
        login(&app, "nao", "wrong-password").await;
    }
    assert_eq!(login(&app, "nao", PASSWORD).await.status(), StatusCode::OK);

    let (failures,): (i32,) =
        sqlx::query_as("SELECT failed_login_count FROM users WHERE username = 'nao'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(failures, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivated_user_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let user = register(&app, "gone").await;

    // No endpoint deactivates accounts; flip the flag directly.
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user["id"].as_i64().unwrap())
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(
        login(&app, "gone", PASSWORD).await.status(),
        StatusCode::FORBIDDEN
    );
}
