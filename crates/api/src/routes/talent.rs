//! Route definitions for the `/talent` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::talent_search;
use crate::state::AppState;

/// Routes mounted at `/talent`.
///
/// ```text
/// GET  /search   -> search_talent (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(talent_search::search_talent))
}
