use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatImageResponse {
    pub url: String,
}

/// GET /api/v1/cat/image
///
/// A random cat picture; upstream failures surface as 503.
pub async fn random_cat_image(
    State(state): State<AppState>,
) -> AppResult<Json<CatImageResponse>> {
    let url = state.cat_images.random_image_url().await?;
    Ok(Json(CatImageResponse { url }))
}
