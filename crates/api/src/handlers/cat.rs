//! Handlers for the `/cats` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petchat_core::pets::{validate_age, validate_pet_name, validate_weight};
use petchat_core::types::DbId;
use petchat_db::models::cat::{Cat, CreateCat, UpdateCat};
use petchat_db::repositories::CatRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/cats
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCat>,
) -> AppResult<(StatusCode, Json<Cat>)> {
    validate_pet_name(&input.name)?;
    validate_age(input.age)?;
    validate_weight(input.weight)?;
    let cat = CatRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cat)))
}

/// GET /api/v1/cats
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Cat>>> {
    let (limit, offset) = params.resolve();
    let cats = CatRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(cats))
}

/// GET /api/v1/cats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cat>> {
    let cat = CatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Cat", id))?;
    Ok(Json(cat))
}

/// PUT /api/v1/cats/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCat>,
) -> AppResult<Json<Cat>> {
    if let Some(name) = &input.name {
        validate_pet_name(name)?;
    }
    validate_age(input.age)?;
    validate_weight(input.weight)?;
    let cat = CatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Cat", id))?;
    Ok(Json(cat))
}

/// DELETE /api/v1/cats/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CatRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Cat", id))
    }
}
