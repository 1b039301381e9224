//! Handlers for the `/bots` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petchat_core::pets::{validate_bot_color, validate_name_length};
use petchat_core::types::DbId;
use petchat_db::models::bot::{ChatBot, CreateChatBot, UpdateChatBot};
use petchat_db::repositories::ChatBotRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/bots
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChatBot>,
) -> AppResult<(StatusCode, Json<ChatBot>)> {
    validate_name_length(&input.name)?;
    validate_bot_color(&input.color)?;
    let bot = ChatBotRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bot)))
}

/// GET /api/v1/bots
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ChatBot>>> {
    let (limit, offset) = params.resolve();
    let bots = ChatBotRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(bots))
}

/// GET /api/v1/bots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChatBot>> {
    let bot = ChatBotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("ChatBot", id))?;
    Ok(Json(bot))
}

/// PUT /api/v1/bots/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChatBot>,
) -> AppResult<Json<ChatBot>> {
    if let Some(name) = &input.name {
        validate_name_length(name)?;
    }
    if let Some(color) = &input.color {
        validate_bot_color(color)?;
    }
    let bot = ChatBotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("ChatBot", id))?;
    Ok(Json(bot))
}

/// DELETE /api/v1/bots/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ChatBotRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ChatBot", id))
    }
}
