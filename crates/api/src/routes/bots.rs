//! Route definitions for the `/bots` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bot;
use crate::state::AppState;

/// Routes mounted at `/bots`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bot::list).post(bot::create))
        .route(
            "/{id}",
            get(bot::get_by_id).put(bot::update).delete(bot::delete),
        )
}
