pub mod adv_chat;
pub mod auth;
pub mod bots;
pub mod cats;
pub mod dogs;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                                           greeting
/// /cat/image                                       random cat picture
/// /search?q=                                       web search, top 5
///
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user (requires auth)
///
/// /cats                                            list, create
/// /cats/{id}                                       get, update, delete
/// /bots                                            list, create
/// /bots/{id}                                       get, update, delete
/// /dogs                                            list, create
/// /dogs/{id}                                       get, update, delete
///
/// /adv-chat/characters                             list, create
/// /adv-chat/characters/{id}                        get
/// /adv-chat/scenarios                              list, create
/// /adv-chat/scenarios/{id}                         get (full tree), update
/// /adv-chat/scenarios/{id}/dialogue-lines          create line
/// /adv-chat/dialogue-lines/{id}                    get line
/// /adv-chat/dialogue-lines/{id}/choices            create choice
/// /adv-chat/sessions/start                         start session (POST)
/// /adv-chat/sessions/{id}                          current state
/// /adv-chat/sessions/{id}/choice                   make choice (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        .route("/cat/image", get(handlers::cat_image::random_cat_image))
        .route("/search", get(handlers::search::search))
        .nest("/auth", auth::router())
        .nest("/cats", cats::router())
        .nest("/bots", bots::router())
        .nest("/dogs", dogs::router())
        .nest("/adv-chat", adv_chat::router())
}
