//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use petchat_api::error::AppError;
use petchat_api::external::UpstreamError;
use petchat_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::not_found("ChatSession", 42)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "ChatSession with id 42 not found");
}

#[tokio::test]
async fn invalid_state_returns_400() {
    let err = AppError::Core(CoreError::InvalidState(
        "Choice 7 is not available from the current dialogue line".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_STATE");
    assert!(json["error"].as_str().unwrap().contains("Choice 7"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(CoreError::Validation("Name must not be empty".into()).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(CoreError::Conflict("duplicate name".into()).into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn auth_errors_return_401_and_403() {
    let (status, _) = error_to_response(CoreError::Unauthorized("no".into()).into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = error_to_response(CoreError::Forbidden("no".into()).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn internal_errors_do_not_leak_details() {
    for err in [
        AppError::InternalError("secret connection string".into()),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn upstream_errors_return_503() {
    let err = AppError::Upstream(UpstreamError::Status {
        service: "cat image service",
        status: 502,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(json["error"], "cat image service is temporarily unavailable");
}
