//! Repeat-founders directory.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use talentscope_core::search::{clamp_limit, clamp_offset, DEFAULT_FOUNDERS_LIMIT, MAX_PAGE_LIMIT};
use talentscope_db::models::FounderProfile;
use talentscope_db::repositories::FounderProfileRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/founders/repeat`.
#[derive(Debug, Deserialize)]
pub struct RepeatFoundersParams {
    /// Optional name query (matches first or last name, case-insensitive).
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated directory page.
#[derive(Debug, Serialize)]
pub struct RepeatFoundersPage {
    pub founders: Vec<FounderProfile>,
    /// Total matching rows (same name filter), for pagination controls.
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
}

/// GET /api/v1/founders/repeat
///
/// Founders flagged `is_repeat_founder`, ordered by first name, paginated.
pub async fn list_repeat_founders(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RepeatFoundersParams>,
) -> AppResult<Json<DataResponse<RepeatFoundersPage>>> {
    let limit = clamp_limit(params.limit, DEFAULT_FOUNDERS_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let name_query = params.q.as_deref();

    let founders =
        FounderProfileRepo::list_repeat_founders(&state.pool, name_query, limit, offset).await?;
    let total_count = FounderProfileRepo::count_repeat_founders(&state.pool, name_query).await?;

    Ok(Json(DataResponse {
        data: RepeatFoundersPage {
            founders,
            total_count,
            limit,
            offset,
        },
    }))
}
