//! Handlers for the `/dogs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petchat_core::pets::{validate_age, validate_pet_name};
use petchat_core::types::DbId;
use petchat_db::models::dog::{CreateDog, Dog, DogList, UpdateDog};
use petchat_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/dogs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDog>,
) -> AppResult<(StatusCode, Json<Dog>)> {
    validate_pet_name(&input.name)?;
    validate_age(input.age)?;
    let dog = DogRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(dog)))
}

/// GET /api/v1/dogs
///
/// Unlike the other lists this one is wrapped as `{dogs, count}`, where
/// `count` is the total across all pages.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DogList>> {
    let (limit, offset) = params.resolve();
    let dogs = DogRepo::list(&state.pool, limit, offset).await?;
    let count = DogRepo::count(&state.pool).await?;
    Ok(Json(DogList { dogs, count }))
}

/// GET /api/v1/dogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Dog>> {
    let dog = DogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Dog", id))?;
    Ok(Json(dog))
}

/// PUT /api/v1/dogs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDog>,
) -> AppResult<Json<Dog>> {
    if let Some(name) = &input.name {
        validate_pet_name(name)?;
    }
    validate_age(input.age)?;
    let dog = DogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Dog", id))?;
    Ok(Json(dog))
}

/// DELETE /api/v1/dogs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DogRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Dog", id))
    }
}
