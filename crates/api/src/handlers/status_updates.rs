//! Status-update feed: recent transitions, enriched for display.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use talentscope_core::search::{clamp_limit, MAX_PAGE_LIMIT, STATUS_FEED_WINDOW_DAYS};
use talentscope_db::models::EnrichedStatusUpdate;
use talentscope_db::repositories::StatusUpdateRepo;

use crate::enrichment::enrich_batch;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the feed (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/status-updates
///
/// Transitions within the last three months, newest first, excluding moves
/// into `currently_employed`. Each record is enriched with the person's
/// resolved name, company, and avatar before it ships.
pub async fn list_status_updates(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<DataResponse<Vec<EnrichedStatusUpdate>>>> {
    let since = chrono::Utc::now() - chrono::Duration::days(STATUS_FEED_WINDOW_DAYS);
    let limit = params
        .limit
        .map(|l| clamp_limit(Some(l), MAX_PAGE_LIMIT, MAX_PAGE_LIMIT));

    let updates = StatusUpdateRepo::list_recent(&state.pool, since, limit).await?;
    let enriched = enrich_batch(&state.pool, &state.cache, updates).await;

    Ok(Json(DataResponse { data: enriched }))
}
