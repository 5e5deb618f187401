use std::sync::Arc;

use talentscope_core::cache::QueryCache;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: talentscope_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ephemeral query cache shared by the dashboard and enrichment paths.
    ///
    /// Explicitly constructed in `main` and injected; nothing in the crate
    /// holds a global cache.
    pub cache: Arc<QueryCache>,
    /// HTTP client for OAuth token exchange.
    pub http: reqwest::Client,
}
