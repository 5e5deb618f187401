//! Multi-company fan-out talent search.
//!
//! The client selects up to three past companies; the search issues one
//! filtered query per company, merges the results client-side of the
//! database (dedup by profile id, first company wins), and sorts the merged
//! set by tenure at the most recent position.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use talentscope_core::error::CoreError;
use talentscope_core::search::{is_valid_profile_status, normalize_companies};
use talentscope_core::tenure::tenure_score;
use talentscope_core::types::DbId;
use talentscope_db::models::{FounderProfile, TalentSearchHit};
use talentscope_db::repositories::{FounderProfileRepo, TalentSearchFilters};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/v1/talent/search`.
#[derive(Debug, Deserialize)]
pub struct TalentSearchParams {
    /// Comma-separated company names (1-3 distinct values).
    pub companies: String,
    /// Comma-separated subset of the profile-status vocabulary.
    pub statuses: Option<String>,
    #[serde(default)]
    pub repeat_founder: bool,
    #[serde(default)]
    pub senior_operator: bool,
    /// Free-text query across name/role/company fields.
    pub q: Option<String>,
}

/// Response payload for the fan-out search.
#[derive(Debug, Serialize)]
pub struct TalentSearchResponse {
    pub profiles: Vec<TalentSearchHit>,
    pub total: usize,
    /// Companies whose query failed; their results are simply absent.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/talent/search
///
/// One query per selected company, sequentially (with an optional configured
/// pause between legs). A failed leg is reported in `warnings` and the loop
/// continues; only a fully empty selection is an error.
pub async fn search_talent(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TalentSearchParams>,
) -> AppResult<Json<DataResponse<TalentSearchResponse>>> {
    let companies: Vec<String> = params.companies.split(',').map(str::to_string).collect();
    let companies = normalize_companies(&companies).map_err(AppError::Core)?;

    let filters = build_filters(&params)?;

    let mut legs: Vec<(String, Vec<FounderProfile>)> = Vec::with_capacity(companies.len());
    let mut warnings = Vec::new();

    for (i, company) in companies.iter().enumerate() {
        if i > 0 && state.config.search_fanout_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(state.config.search_fanout_delay_ms)).await;
        }

        match FounderProfileRepo::search_by_company(&state.pool, company, &filters).await {
            Ok(profiles) => {
                tracing::debug!(company = %company, found = profiles.len(), "Fan-out leg complete");
                legs.push((company.clone(), profiles));
            }
            Err(err) => {
                tracing::error!(company = %company, error = %err, "Fan-out leg failed");
                warnings.push(company.clone());
            }
        }
    }

    let mut hits = merge_company_results(legs);
    sort_by_tenure(&mut hits);

    tracing::debug!(
        companies = companies.len(),
        unique_profiles = hits.len(),
        failed_legs = warnings.len(),
        "Talent search complete",
    );

    Ok(Json(DataResponse {
        data: TalentSearchResponse {
            total: hits.len(),
            profiles: hits,
            warnings,
        },
    }))
}

fn build_filters(params: &TalentSearchParams) -> Result<TalentSearchFilters, AppError> {
    let statuses: Vec<String> = params
        .statuses
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    for status in &statuses {
        if !is_valid_profile_status(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown profile status filter: {status}"
            ))));
        }
    }

    Ok(TalentSearchFilters {
        statuses,
        repeat_founder_only: params.repeat_founder,
        senior_operator_only: params.senior_operator,
        query: params.q.clone(),
    })
}

// ---------------------------------------------------------------------------
// Merge & sort
// ---------------------------------------------------------------------------

/// Merge per-company result sets into one deduplicated list.
///
/// First occurrence across the company iteration order wins and fixes the
/// displayed `role_at_company_searched` -- the documented tie-break for a
/// profile matched by more than one selected company.
fn merge_company_results(legs: Vec<(String, Vec<FounderProfile>)>) -> Vec<TalentSearchHit> {
    let mut seen: HashSet<DbId> = HashSet::new();
    let mut merged = Vec::new();

    for (company, profiles) in legs {
        for profile in profiles {
            if !seen.insert(profile.id) {
                continue;
            }
            let role_at_company_searched = profile
                .experience
                .iter()
                .find(|exp| exp.company.eq_ignore_ascii_case(&company))
                .map(|exp| exp.title.clone());
            merged.push(TalentSearchHit {
                profile,
                role_at_company_searched,
            });
        }
    }

    merged
}

/// Stable descending sort by tenure at the most recent position.
///
/// Profiles with no parseable duration score 0 and land last, keeping their
/// relative order.
fn sort_by_tenure(hits: &mut [TalentSearchHit]) {
    hits.sort_by_key(|hit| Reverse(tenure_score(hit.profile.first_experience_duration())));
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sqlx::types::Json;
    use talentscope_db::models::Experience;

    use super::*;

    fn profile(id: i64, company: &str, title: &str, duration: Option<&str>) -> FounderProfile {
        FounderProfile {
            id,
            first_name: "Jane".into(),
            last_name: format!("Doe{id}"),
            full_name: format!("Jane Doe{id}"),
            linkedin_url: format!("https://linkedin.com/in/jane-{id}"),
            experience: Json(vec![Experience {
                company: company.into(),
                title: title.into(),
                date_range: None,
                duration: duration.map(str::to_string),
            }]),
            education: Json(Vec::new()),
            location: None,
            profile_status: "stealth".into(),
            status_confidence_label: None,
            is_senior_operator: false,
            is_repeat_founder: false,
            search_company: Some(company.into()),
            role: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn merge_deduplicates_by_profile_id() {
        // The same profile comes back for both selected companies.
        let legs = vec![
            ("Acme".to_string(), vec![profile(1, "Acme", "CTO", None)]),
            ("Acme".to_string(), vec![profile(1, "Acme", "CTO", None)]),
        ];
        let merged = merge_company_results(legs);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn first_company_wins_the_displayed_role() {
        let mut overlapping = profile(1, "Acme", "CTO", None);
        overlapping.experience = Json(vec![
            Experience {
                company: "Acme".into(),
                title: "CTO".into(),
                date_range: None,
                duration: None,
            },
            Experience {
                company: "Beta".into(),
                title: "VP Eng".into(),
                date_range: None,
                duration: None,
            },
        ]);

        let legs = vec![
            ("Beta".to_string(), vec![overlapping.clone()]),
            ("Acme".to_string(), vec![overlapping]),
        ];
        let merged = merge_company_results(legs);
        assert_eq!(merged.len(), 1);
        // Beta was iterated first, so its role is displayed.
        assert_eq!(merged[0].role_at_company_searched.as_deref(), Some("VP Eng"));
    }

    #[test]
    fn role_match_is_case_insensitive() {
        let legs = vec![("acme".to_string(), vec![profile(1, "Acme", "CTO", None)])];
        let merged = merge_company_results(legs);
        assert_eq!(merged[0].role_at_company_searched.as_deref(), Some("CTO"));
    }

    #[test]
    fn missing_experience_entry_leaves_role_unset() {
        let legs = vec![(
            "Gamma".to_string(),
            vec![profile(1, "Acme", "CTO", Some("2 yrs"))],
        )];
        let merged = merge_company_results(legs);
        assert!(merged[0].role_at_company_searched.is_none());
    }

    #[test]
    fn sort_is_descending_by_tenure() {
        let legs = vec![(
            "Acme".to_string(),
            vec![
                profile(1, "Acme", "CTO", Some("5 mos")),
                profile(2, "Acme", "CEO", Some("2 yrs 3 mos")),
                profile(3, "Acme", "COO", Some("3 yrs")),
            ],
        )];
        let mut hits = merge_company_results(legs);
        sort_by_tenure(&mut hits);

        let ids: Vec<_> = hits.iter().map(|h| h.profile.id).collect();
        assert_eq!(ids, vec![3, 2, 1]); // 36, 27, 5 months
    }

    #[test]
    fn unparseable_durations_sort_last_in_original_order() {
        let legs = vec![(
            "Acme".to_string(),
            vec![
                profile(1, "Acme", "CTO", None),
                profile(2, "Acme", "CEO", Some("1 yr")),
                profile(3, "Acme", "COO", Some("nonsense")),
            ],
        )];
        let mut hits = merge_company_results(legs);
        sort_by_tenure(&mut hits);

        let ids: Vec<_> = hits.iter().map(|h| h.profile.id).collect();
        // Profile 2 scores 12; 1 and 3 score 0 and keep their relative order.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn status_filter_vocabulary_is_enforced() {
        let params = TalentSearchParams {
            companies: "Acme".into(),
            statuses: Some("stealth,laid_off".into()),
            repeat_founder: false,
            senior_operator: false,
            q: None,
        };
        assert!(build_filters(&params).is_err());

        let params = TalentSearchParams {
            statuses: Some("stealth,recently_quit".into()),
            ..params
        };
        let filters = build_filters(&params).unwrap();
        assert_eq!(filters.statuses, vec!["stealth", "recently_quit"]);
    }
}
