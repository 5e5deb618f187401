//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /signup                         -> signup
/// POST /login                          -> login
/// POST /refresh                        -> refresh
/// POST /logout                         -> logout (requires auth)
/// GET  /session                        -> current_session (requires auth)
/// POST /forgot-password                -> forgot_password
/// GET  /oauth/{provider}               -> oauth_start
/// GET  /oauth/{provider}/callback      -> oauth_callback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::current_session))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/oauth/{provider}", get(auth::oauth_start))
        .route("/oauth/{provider}/callback", get(auth::oauth_callback))
}
