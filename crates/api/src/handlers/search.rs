//! Handler for `/search`, a thin proxy over the instant-answer API.

use axum::extract::{Query, State};
use axum::Json;
use petchat_core::error::CoreError;
use serde::Deserialize;

use crate::error::AppResult;
use crate::external::SearchResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// GET /api/v1/search?q=...
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(CoreError::Validation("Search query must not be empty".into()).into());
    }

    let response = state.web_search.search(query).await?;
    tracing::debug!(query, results = response.results.len(), "Search completed");
    Ok(Json(response))
}
