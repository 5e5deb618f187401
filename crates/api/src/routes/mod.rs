pub mod auth;
pub mod dashboard;
pub mod health;
pub mod talent;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                          signup (public)
/// /auth/login                           login (public)
/// /auth/refresh                         refresh (public)
/// /auth/logout                          logout (requires auth)
/// /auth/session                         current user (requires auth)
/// /auth/forgot-password                 request reset (public)
/// /auth/oauth/{provider}                authorize URL (public)
/// /auth/oauth/{provider}/callback       code exchange (public)
///
/// /dashboard/widgets/recent-updates     five newest status changes
/// /dashboard/widgets/counts             company / profile totals
///
/// /talent/search                        multi-company fan-out search
///
/// /status-updates                       enriched three-month feed
/// /founders/repeat                      repeat-founders directory
/// /companies                            tracked company names
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (signup, login, refresh, OAuth).
        .nest("/auth", auth::router())
        // Dashboard widget data endpoints.
        .nest("/dashboard", dashboard::router())
        // Talent search fan-out.
        .nest("/talent", talent::router())
        // Status-update feed.
        .route(
            "/status-updates",
            get(handlers::status_updates::list_status_updates),
        )
        // Repeat-founders directory.
        .route(
            "/founders/repeat",
            get(handlers::founders::list_repeat_founders),
        )
        // Company picker data.
        .route("/companies", get(handlers::companies::list_companies))
}
