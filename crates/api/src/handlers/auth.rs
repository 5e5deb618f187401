//! Authentication handlers: signup, login, refresh, logout, OAuth.
//!
//! Sessions are refresh-token based: the client holds a short-lived JWT for
//! requests and an opaque refresh token for renewal. Refresh tokens rotate on
//! every use and only their SHA-256 hash is persisted.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use validator::Validate;

use talentscope_core::error::CoreError;
use talentscope_db::models::{User, UserInfo};
use talentscope_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Password-reset tokens are valid for one hour.
const PASSWORD_RESET_EXPIRY_HOURS: i64 = 1;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub password: String,
    #[validate(length(max = 200, message = "Name is too long"))]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: String,
    #[allow(dead_code)] // echoed by the provider; CSRF binding is the client's
    pub state: Option<String>,
}

/// Tokens plus user info returned from every successful authentication.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access-token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct OAuthStartResponse {
    pub authorize_url: String,
    pub state: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    req.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&req.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    // A duplicate email trips uq_users_email and surfaces as 409.
    let user = UserRepo::create(
        &state.pool,
        &req.email,
        req.full_name.as_deref(),
        &password_hash,
    )
    .await?;

    tracing::info!(user_id = user.id, "New account created");

    let response = create_auth_response(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// POST /api/v1/auth/login
///
/// Invalid email and wrong password produce the same 401 so the endpoint
/// cannot be used to probe for accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    req.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    let password_hash = user.password_hash.as_deref().ok_or_else(invalid)?;
    let verified = verify_password(&req.password, password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(invalid());
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented token's session is revoked and a
/// fresh session is issued alongside a new access token.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let hash = hash_refresh_token(&req.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Account is unavailable".into())))?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/v1/auth/logout
///
/// Revokes every live session for the authenticated user.
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, revoked, "User logged out");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "revoked_sessions": revoked }),
    }))
}

/// GET /api/v1/auth/session
pub async fn current_session(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserInfo>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "user",
                id: auth.user_id.to_string(),
            })
        })?;

    Ok(Json(DataResponse {
        data: UserInfo::from(&user),
    }))
}

/// POST /api/v1/auth/forgot-password
///
/// Always answers 202 whether or not the email exists; delivery of the reset
/// link happens out of band.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AppResult<StatusCode> {
    req.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if let Some(user) = UserRepo::find_by_email(&state.pool, &req.email).await? {
        let token = Uuid::new_v4().to_string();
        let token_hash = format!("{:x}", Sha256::digest(token.as_bytes()));
        let expires_at =
            chrono::Utc::now() + chrono::Duration::hours(PASSWORD_RESET_EXPIRY_HOURS);

        UserRepo::create_password_reset(&state.pool, user.id, &token_hash, expires_at).await?;
        tracing::info!(user_id = user.id, "Password reset token issued");
    } else {
        tracing::debug!("Password reset requested for unknown email");
    }

    Ok(StatusCode::ACCEPTED)
}

/// GET /api/v1/auth/oauth/{provider}
///
/// Returns the provider's authorization URL and a fresh `state` nonce for the
/// client to carry through the redirect.
pub async fn oauth_start(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> AppResult<Json<DataResponse<OAuthStartResponse>>> {
    let provider = state.config.oauth_providers.get(&provider).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Unknown OAuth provider: {provider}"
        )))
    })?;

    let nonce = Uuid::new_v4().to_string();
    let authorize_url = provider.build_authorize_url(&nonce);

    Ok(Json(DataResponse {
        data: OAuthStartResponse {
            authorize_url,
            state: nonce,
        },
    }))
}

/// GET /api/v1/auth/oauth/{provider}/callback
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<OAuthCallbackParams>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let provider = state
        .config
        .oauth_providers
        .get(&provider)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown OAuth provider: {provider}"
            )))
        })?
        .clone();

    let identity = provider
        .exchange_code(&state.http, &params.code)
        .await
        .map_err(AppError::Core)?;

    let user = UserRepo::upsert_oauth(
        &state.pool,
        &identity.email,
        identity.full_name.as_deref(),
        &provider.name,
        &identity.subject,
    )
    .await?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    UserRepo::record_login(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, provider = %provider.name, "OAuth sign-in");

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(DataResponse { data: response }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue an access token and a fresh refresh-token session for `user`.
async fn create_auth_response(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at =
        chrono::Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::from(user),
    })
}
