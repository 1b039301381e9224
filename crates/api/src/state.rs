use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::DialogueEngine;
use crate::external::{CatImageClient, WebSearchClient};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: petchat_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Branching-dialogue session engine.
    pub dialogue: Arc<DialogueEngine>,
    pub cat_images: CatImageClient,
    pub web_search: WebSearchClient,
}

impl AppState {
    pub fn new(pool: petchat_db::DbPool, config: ServerConfig) -> Self {
        let dialogue = Arc::new(DialogueEngine::new(pool.clone()));
        // One connection pool shared by every outbound client.
        let http = reqwest::Client::new();
        let cat_images = CatImageClient::with_client(http.clone(), config.cat_api_url.clone());
        let web_search = WebSearchClient::with_client(http, config.search_api_url.clone());
        Self {
            pool,
            config: Arc::new(config),
            dialogue,
            cat_images,
            web_search,
        }
    }
}
