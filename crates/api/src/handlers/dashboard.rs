//! Dashboard widget handlers.
//!
//! Both widgets are read-mostly and served through the query cache; a stale
//! read within the TTL is acceptable by design.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use talentscope_core::cache::{COMPANY_PROFILE_COUNTS_KEY, RECENT_STATUS_UPDATES_KEY};
use talentscope_core::search::{DASHBOARD_RECENT_LIMIT, STATUS_FEED_WINDOW_DAYS};
use talentscope_db::models::EnrichedStatusUpdate;
use talentscope_db::repositories::{FounderProfileRepo, StatusUpdateRepo};

use crate::enrichment::enrich_batch;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// TTL for the recent-updates widget; status changes should show up within
/// a minute.
const RECENT_UPDATES_TTL: Duration = Duration::from_secs(60);

/// Counts shown in the dashboard metric cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCounts {
    /// Distinct companies founder profiles are indexed under.
    pub company_count: i64,
    /// Total founder profiles tracked.
    pub profile_count: i64,
}

/// GET /api/v1/dashboard/widgets/recent-updates
///
/// The five newest status changes, enriched, cached for 60 seconds under
/// `recent_status_updates`.
pub async fn recent_updates(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EnrichedStatusUpdate>>>> {
    if let Some(cached) = state
        .cache
        .get::<Vec<EnrichedStatusUpdate>>(RECENT_STATUS_UPDATES_KEY)
    {
        tracing::debug!("Recent-updates widget served from cache");
        return Ok(Json(DataResponse { data: cached }));
    }

    let since = chrono::Utc::now() - chrono::Duration::days(STATUS_FEED_WINDOW_DAYS);
    let updates =
        StatusUpdateRepo::list_recent(&state.pool, since, Some(DASHBOARD_RECENT_LIMIT)).await?;
    let enriched = enrich_batch(&state.pool, &state.cache, updates).await;

    state.cache.set(
        RECENT_STATUS_UPDATES_KEY,
        &enriched,
        Some(RECENT_UPDATES_TTL),
    );

    Ok(Json(DataResponse { data: enriched }))
}

/// GET /api/v1/dashboard/widgets/counts
///
/// Talent-pool and tracked-company totals, cached under
/// `company_profile_counts` with the default TTL.
pub async fn counts(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardCounts>>> {
    if let Some(cached) = state.cache.get::<DashboardCounts>(COMPANY_PROFILE_COUNTS_KEY) {
        return Ok(Json(DataResponse { data: cached }));
    }

    let company_count = FounderProfileRepo::distinct_company_count(&state.pool).await?;
    let profile_count = FounderProfileRepo::count(&state.pool).await?;

    let counts = DashboardCounts {
        company_count,
        profile_count,
    };
    state.cache.set(COMPANY_PROFILE_COUNTS_KEY, &counts, None);

    Ok(Json(DataResponse { data: counts }))
}
