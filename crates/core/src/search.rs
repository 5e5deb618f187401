//! Talent-search constants and shared helpers.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! and the API handlers agree on the filter vocabulary and pagination
//! bounds.

use crate::error::CoreError;

/// Maximum number of companies a single fan-out search may target.
pub const MAX_SEARCH_COMPANIES: usize = 3;

/// The fixed profile-status vocabulary used by search filters.
pub const PROFILE_STATUSES: &[&str] = &["stealth", "building_in_public", "recently_quit"];

/// Default page size for the repeat-founders directory.
pub const DEFAULT_FOUNDERS_LIMIT: i64 = 10;

/// Maximum page size for any paginated listing.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Window (in days) for the status-update feed: roughly three months.
pub const STATUS_FEED_WINDOW_DAYS: i64 = 90;

/// Number of updates shown in the dashboard recent-updates widget.
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;

/// Check whether a status filter value belongs to the fixed vocabulary.
pub fn is_valid_profile_status(status: &str) -> bool {
    PROFILE_STATUSES.contains(&status)
}

/// Validate and normalize the company list for a fan-out search.
///
/// Deduplicates case-insensitively while preserving first-occurrence order
/// (the iteration order determines the dedup tie-break downstream). Zero or
/// more than [`MAX_SEARCH_COMPANIES`] distinct names is a validation error.
pub fn normalize_companies(companies: &[String]) -> Result<Vec<String>, CoreError> {
    let mut seen: Vec<String> = Vec::new();
    for name in companies {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
            seen.push(trimmed.to_string());
        }
    }

    if seen.is_empty() {
        return Err(CoreError::Validation(
            "Select at least one company to search".into(),
        ));
    }
    if seen.len() > MAX_SEARCH_COMPANIES {
        return Err(CoreError::Validation(format!(
            "At most {MAX_SEARCH_COMPANIES} companies may be searched at once"
        )));
    }

    Ok(seen)
}

/// Clamp a requested page limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    requested.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}
