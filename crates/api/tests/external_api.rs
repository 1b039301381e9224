//! HTTP-level tests for `/cat/image` and `/search`, with the third-party
//! services replaced by local stub servers.

mod common;

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get as get_route;
use axum::{Json, Router};
use common::{body_json, get, spawn_stub, test_config};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Neither endpoint touches the database.
fn lazy_pool() -> PgPool {
    PgPool::connect_lazy("postgres://localhost/unused").unwrap()
}

async fn app_with_cat_stub(stub: Router) -> Router {
    let mut config = test_config();
    config.cat_api_url = format!("{}/v1/images/search", spawn_stub(stub).await);
    common::build_test_app_with_config(lazy_pool(), config)
}

async fn app_with_search_stub(stub: Router) -> Router {
    let mut config = test_config();
    config.search_api_url = format!("{}/", spawn_stub(stub).await);
    common::build_test_app_with_config(lazy_pool(), config)
}

// ---------------------------------------------------------------------------
// Cat images
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_cat_image_returns_first_url() {
    let stub = Router::new().route(
        "/v1/images/search",
        get_route(|| async {
            Json(json!([{ "id": "abc", "url": "https://cdn.test/abc.jpg", "width": 640 }]))
        }),
    );
    let app = app_with_cat_stub(stub).await;

    let response = get(app, "/api/v1/cat/image").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "url": "https://cdn.test/abc.jpg" })
    );
}

#[tokio::test]
async fn test_cat_image_upstream_failures_are_503() {
    let failing = Router::new().route(
        "/v1/images/search",
        get_route(|| async { StatusCode::BAD_GATEWAY }),
    );
    let response = get(app_with_cat_stub(failing).await, "/api/v1/cat/image").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["error"], "cat image service is temporarily unavailable");

    let empty = Router::new().route("/v1/images/search", get_route(|| async { Json(json!([])) }));
    let response = get(app_with_cat_stub(empty).await, "/api/v1/cat/image").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"],
        "cat image service returned an unexpected response"
    );

    // test_config points at a port nothing listens on.
    let app = common::build_test_app(lazy_pool());
    let response = get(app, "/api/v1/cat/image").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"],
        "Failed to connect to cat image service"
    );
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Echoes the query into the first topic and pads with a nested group.
async fn instant_answer(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(params.get("format").map(String::as_str), Some("json"));
    let q = params.get("q").cloned().unwrap_or_default();
    let mut nested: Vec<Value> = (1..=6)
        .map(|i| json!({ "Text": format!("{q} {i}"), "FirstURL": format!("https://ddg.test/{i}") }))
        .collect();
    nested.push(json!({ "Name": "no url" }));
    Json(json!({
        "RelatedTopics": [
            { "Text": q, "FirstURL": "https://ddg.test/0" },
            { "Name": "More", "Topics": nested },
        ]
    }))
}

#[tokio::test]
async fn test_search_returns_top_five() {
    let stub = Router::new().route("/", get_route(instant_answer));
    let app = app_with_search_stub(stub).await;

    let response = get(app, "/api/v1/search?q=siamese%20cat").await;
    assert_eq!(response.status(), StatusCode::OK);

    let results = body_json(response).await["results"].clone();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(
        results[0],
        json!({ "title": "siamese cat", "url": "https://ddg.test/0" })
    );
    assert_eq!(results[4]["title"], "siamese cat 4");
}

#[tokio::test]
async fn test_search_validation_and_failures() {
    let stub = Router::new().route("/", get_route(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let app = app_with_search_stub(stub).await;

    let response = get(app.clone(), "/api/v1/search?q=%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get(app.clone(), "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(app, "/api/v1/search?q=cats").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"],
        "search service is temporarily unavailable"
    );
}
