//! Route definitions for the `/adv-chat` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::adv_chat;
use crate::state::AppState;

/// Routes mounted at `/adv-chat`.
///
/// ```text
/// GET  /characters                       -> list_characters
/// POST /characters                       -> create_character
/// GET  /characters/{id}                  -> get_character
/// GET  /scenarios                        -> list_scenarios
/// POST /scenarios                        -> create_scenario
/// GET  /scenarios/{id}                   -> get_scenario
/// PUT  /scenarios/{id}                   -> update_scenario
/// POST /scenarios/{id}/dialogue-lines    -> create_dialogue_line
/// GET  /dialogue-lines/{id}              -> get_dialogue_line
/// POST /dialogue-lines/{id}/choices      -> create_choice
/// POST /sessions/start                   -> start_session
/// GET  /sessions/{id}                    -> get_session
/// POST /sessions/{id}/choice             -> make_choice
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/characters",
            get(adv_chat::list_characters).post(adv_chat::create_character),
        )
        .route("/characters/{id}", get(adv_chat::get_character))
        .route(
            "/scenarios",
            get(adv_chat::list_scenarios).post(adv_chat::create_scenario),
        )
        .route(
            "/scenarios/{id}",
            get(adv_chat::get_scenario).put(adv_chat::update_scenario),
        )
        .route(
            "/scenarios/{id}/dialogue-lines",
            post(adv_chat::create_dialogue_line),
        )
        .route("/dialogue-lines/{id}", get(adv_chat::get_dialogue_line))
        .route(
            "/dialogue-lines/{id}/choices",
            post(adv_chat::create_choice),
        )
        .route("/sessions/start", post(adv_chat::start_session))
        .route("/sessions/{id}", get(adv_chat::get_session))
        .route("/sessions/{id}/choice", post(adv_chat::make_choice))
}
