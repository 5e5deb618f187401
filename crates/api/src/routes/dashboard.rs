//! Route definitions for the dashboard widgets.
//!
//! All endpoints require authentication.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Widget data routes mounted at `/dashboard`.
///
/// ```text
/// GET  /widgets/recent-updates   -> recent_updates
/// GET  /widgets/counts           -> counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/widgets/recent-updates", get(dashboard::recent_updates))
        .route("/widgets/counts", get(dashboard::counts))
}
