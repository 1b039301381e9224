//! Handlers for the `/adv-chat` resource: characters, scenarios, dialogue
//! lines, choices and chat sessions.
//!
//! Authoring handlers validate input and talk to the repositories directly.
//! Session handlers delegate to [`DialogueEngine`](crate::engine::DialogueEngine).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petchat_core::adv_chat::{
    ensure_same_scenario, validate_character_name, validate_choice_text, validate_dialogue_text,
    validate_label, validate_scenario_name,
};
use petchat_core::error::CoreError;
use petchat_core::types::DbId;
use petchat_db::models::adv_character::{AdvCharacter, CreateAdvCharacter};
use petchat_db::models::adv_dialogue::{
    Choice, CreateChoice, CreateDialogueLine, DialogueLineDetail,
};
use petchat_db::models::adv_scenario::{
    AdvScenario, AdvScenarioDetail, CreateAdvScenario, UpdateAdvScenario,
};
use petchat_db::models::adv_session::{ChatState, MakeChoiceRequest, StartChatRequest};
use petchat_db::repositories::{
    AdvCharacterRepo, AdvScenarioRepo, ChoiceRepo, DialogueLineRepo,
};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// POST /api/v1/adv-chat/characters
pub async fn create_character(
    State(state): State<AppState>,
    Json(input): Json<CreateAdvCharacter>,
) -> AppResult<(StatusCode, Json<AdvCharacter>)> {
    validate_character_name(&input.name)?;
    let character = AdvCharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/adv-chat/characters
pub async fn list_characters(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<AdvCharacter>>> {
    let (limit, offset) = params.resolve();
    let characters = AdvCharacterRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(characters))
}

/// GET /api/v1/adv-chat/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdvCharacter>> {
    let character = AdvCharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Character", id))?;
    Ok(Json(character))
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// POST /api/v1/adv-chat/scenarios
pub async fn create_scenario(
    State(state): State<AppState>,
    Json(input): Json<CreateAdvScenario>,
) -> AppResult<(StatusCode, Json<AdvScenario>)> {
    validate_scenario_name(&input.name)?;
    let scenario = AdvScenarioRepo::create(&state.pool, &input).await?;
    tracing::info!(scenario_id = scenario.id, name = %scenario.name, "Scenario created");
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// GET /api/v1/adv-chat/scenarios
pub async fn list_scenarios(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<AdvScenario>>> {
    let (limit, offset) = params.resolve();
    let scenarios = AdvScenarioRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = scenarios.len(), "Listed scenarios");
    Ok(Json(scenarios))
}

/// GET /api/v1/adv-chat/scenarios/{id}
///
/// The scenario together with its full dialogue tree.
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdvScenarioDetail>> {
    let detail = state.dialogue.scenario_detail(id).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/adv-chat/scenarios/{id}
///
/// A new `first_dialogue_line_id` must name a line of this scenario;
/// `null` clears it.
pub async fn update_scenario(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdvScenario>,
) -> AppResult<Json<AdvScenario>> {
    if let Some(name) = &input.name {
        validate_scenario_name(name)?;
    }

    AdvScenarioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Scenario", id))?;

    if let Some(Some(line_id)) = input.first_dialogue_line_id {
        let line = DialogueLineRepo::find_by_id(&state.pool, line_id)
            .await?
            .ok_or(AppError::not_found("DialogueLine", line_id))?;
        if line.scenario_id != id {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Dialogue line {line_id} does not belong to scenario {id}"
            ))));
        }
    }

    let scenario = AdvScenarioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Scenario", id))?;
    Ok(Json(scenario))
}

// ---------------------------------------------------------------------------
// Dialogue lines & choices
// ---------------------------------------------------------------------------

/// POST /api/v1/adv-chat/scenarios/{id}/dialogue-lines
pub async fn create_dialogue_line(
    State(state): State<AppState>,
    Path(scenario_id): Path<DbId>,
    Json(input): Json<CreateDialogueLine>,
) -> AppResult<(StatusCode, Json<DialogueLineDetail>)> {
    validate_dialogue_text(&input.text)?;
    validate_label("Emotion", input.emotion.as_deref())?;
    validate_label("Pose", input.pose.as_deref())?;

    AdvScenarioRepo::find_by_id(&state.pool, scenario_id)
        .await?
        .ok_or(AppError::not_found("Scenario", scenario_id))?;

    if let Some(character_id) = input.character_id {
        AdvCharacterRepo::find_by_id(&state.pool, character_id)
            .await?
            .ok_or(AppError::not_found("Character", character_id))?;
    }

    let line = DialogueLineRepo::create(&state.pool, scenario_id, &input).await?;
    tracing::debug!(
        scenario_id,
        dialogue_line_id = line.id,
        order = line.order,
        "Dialogue line created"
    );

    let detail = state.dialogue.line_detail(line).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/adv-chat/dialogue-lines/{id}
pub async fn get_dialogue_line(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DialogueLineDetail>> {
    let line = DialogueLineRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("DialogueLine", id))?;
    let detail = state.dialogue.line_detail(line).await?;
    Ok(Json(detail))
}

/// POST /api/v1/adv-chat/dialogue-lines/{id}/choices
///
/// Both ends of the new edge must exist and belong to the same scenario.
pub async fn create_choice(
    State(state): State<AppState>,
    Path(source_id): Path<DbId>,
    Json(input): Json<CreateChoice>,
) -> AppResult<(StatusCode, Json<Choice>)> {
    validate_choice_text(&input.text)?;

    let source = DialogueLineRepo::find_by_id(&state.pool, source_id)
        .await?
        .ok_or(AppError::not_found("DialogueLine", source_id))?;
    let target = DialogueLineRepo::find_by_id(&state.pool, input.next_dialogue_line_id)
        .await?
        .ok_or(AppError::not_found(
            "DialogueLine",
            input.next_dialogue_line_id,
        ))?;
    ensure_same_scenario(source.scenario_id, target.scenario_id)?;

    let choice = ChoiceRepo::create(&state.pool, source.id, &input).await?;
    tracing::debug!(
        choice_id = choice.id,
        from = source.id,
        to = target.id,
        "Choice created"
    );
    Ok((StatusCode::CREATED, Json(choice)))
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// POST /api/v1/adv-chat/sessions/start
pub async fn start_session(
    State(state): State<AppState>,
    Json(input): Json<StartChatRequest>,
) -> AppResult<Json<ChatState>> {
    let chat = state.dialogue.start_new_session(input.scenario_id).await?;
    Ok(Json(chat))
}

/// GET /api/v1/adv-chat/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ChatState>> {
    let chat = state.dialogue.get_current_chat_state(id).await?;
    Ok(Json(chat))
}

/// POST /api/v1/adv-chat/sessions/{id}/choice
pub async fn make_choice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MakeChoiceRequest>,
) -> AppResult<Json<ChatState>> {
    let chat = state.dialogue.process_choice(id, input.choice_id).await?;
    Ok(Json(chat))
}
