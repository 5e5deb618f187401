//! Status and relative-time formatting for feed and profile displays.
//!
//! Status codes come from an open-ended vocabulary (`stealth`,
//! `building_in_public`, `laid_off`, ...) so everything here works on
//! substrings and never rejects an unknown code.

use crate::types::Timestamp;

/// Fallback when a timestamp is absent.
pub const TIME_AGO_UNKNOWN: &str = "unknown";

/// Fallback when a timestamp is present but unusable (e.g. in the future).
pub const TIME_AGO_RECENTLY: &str = "Recently";

/// Format a raw status code for display: underscores become spaces and each
/// word is title-cased.
///
/// `"laid_off"` -> `"Laid Off"`, `"currently_employed"` -> `"Currently Employed"`.
pub fn format_status(status: &str) -> String {
    status
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visual severity tag attached to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadgeVariant {
    /// Positive: actively building (stealth or in public).
    Success,
    /// Neutral: searching, interviewing, or still employed.
    Secondary,
    /// Negative: laid off or quit.
    Destructive,
    /// Unknown status codes get an unstyled badge.
    Outline,
}

/// Map a status code to its badge variant via ordered substring checks.
///
/// First match wins, so `"stealth_building"` resolves to [`StatusBadgeVariant::Success`]
/// even though a later bucket could also claim "building".
pub fn status_badge_variant(status: &str) -> StatusBadgeVariant {
    if status.contains("building") || status.contains("stealth") {
        StatusBadgeVariant::Success
    } else if status.contains("job_searching")
        || status.contains("interviewing")
        || status.contains("currently_employed")
    {
        StatusBadgeVariant::Secondary
    } else if status.contains("laid_off") || status.contains("quit") {
        StatusBadgeVariant::Destructive
    } else {
        StatusBadgeVariant::Outline
    }
}

/// Render a timestamp as a relative phrase ("3 days ago", "just now").
///
/// `now` is injected so callers and tests agree on the reference instant.
/// `None` yields [`TIME_AGO_UNKNOWN`]; a timestamp after `now` yields
/// [`TIME_AGO_RECENTLY`]. Never panics.
pub fn format_time_ago(timestamp: Option<Timestamp>, now: Timestamp) -> String {
    let Some(ts) = timestamp else {
        return TIME_AGO_UNKNOWN.to_string();
    };

    let elapsed = now.signed_duration_since(ts);
    if elapsed < chrono::Duration::zero() {
        return TIME_AGO_RECENTLY.to_string();
    }

    let days = elapsed.num_days();
    let years = days / 365;
    let months = days / 30;
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if years > 0 {
        plural_ago(years, "year")
    } else if months > 0 {
        plural_ago(months, "month")
    } else if days > 0 {
        plural_ago(days, "day")
    } else if hours > 0 {
        plural_ago(hours, "hour")
    } else if minutes > 0 {
        plural_ago(minutes, "minute")
    } else {
        "just now".to_string()
    }
}

fn plural_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    // -- format_status --

    #[test]
    fn format_status_title_cases_words() {
        assert_eq!(format_status("laid_off"), "Laid Off");
        assert_eq!(format_status("currently_employed"), "Currently Employed");
    }

    #[test]
    fn format_status_single_word() {
        assert_eq!(format_status("stealth"), "Stealth");
        assert_eq!(format_status("quit"), "Quit");
    }

    #[test]
    fn format_status_empty_input() {
        assert_eq!(format_status(""), "");
    }

    // -- status_badge_variant --

    #[test]
    fn badge_building_and_stealth_are_success() {
        assert_eq!(
            status_badge_variant("stealth_building"),
            StatusBadgeVariant::Success
        );
        assert_eq!(
            status_badge_variant("building_in_public"),
            StatusBadgeVariant::Success
        );
    }

    #[test]
    fn badge_employment_states_are_secondary() {
        assert_eq!(
            status_badge_variant("currently_employed"),
            StatusBadgeVariant::Secondary
        );
        assert_eq!(
            status_badge_variant("job_searching"),
            StatusBadgeVariant::Secondary
        );
        assert_eq!(
            status_badge_variant("interviewing"),
            StatusBadgeVariant::Secondary
        );
    }

    #[test]
    fn badge_departures_are_destructive() {
        assert_eq!(status_badge_variant("quit"), StatusBadgeVariant::Destructive);
        assert_eq!(
            status_badge_variant("laid_off"),
            StatusBadgeVariant::Destructive
        );
    }

    #[test]
    fn badge_unknown_status_is_outline() {
        assert_eq!(
            status_badge_variant("unknown_status"),
            StatusBadgeVariant::Outline
        );
    }

    #[test]
    fn badge_first_match_wins() {
        // Contains both "stealth" (success bucket) and "quit" (destructive
        // bucket); the ordered check resolves to success.
        assert_eq!(
            status_badge_variant("quit_to_stealth"),
            StatusBadgeVariant::Success
        );
    }

    // -- format_time_ago --

    #[test]
    fn time_ago_none_is_unknown() {
        assert_eq!(format_time_ago(None, now()), TIME_AGO_UNKNOWN);
    }

    #[test]
    fn time_ago_future_is_recently() {
        let future = now() + Duration::hours(2);
        assert_eq!(format_time_ago(Some(future), now()), TIME_AGO_RECENTLY);
    }

    #[test]
    fn time_ago_days() {
        let ts = now() - Duration::days(3);
        assert_eq!(format_time_ago(Some(ts), now()), "3 days ago");
    }

    #[test]
    fn time_ago_singular_day() {
        let ts = now() - Duration::days(1);
        assert_eq!(format_time_ago(Some(ts), now()), "1 day ago");
    }

    #[test]
    fn time_ago_months_use_thirty_day_buckets() {
        let ts = now() - Duration::days(65);
        assert_eq!(format_time_ago(Some(ts), now()), "2 months ago");
    }

    #[test]
    fn time_ago_years() {
        let ts = now() - Duration::days(800);
        assert_eq!(format_time_ago(Some(ts), now()), "2 years ago");
    }

    #[test]
    fn time_ago_hours_and_minutes() {
        assert_eq!(
            format_time_ago(Some(now() - Duration::hours(5)), now()),
            "5 hours ago"
        );
        assert_eq!(
            format_time_ago(Some(now() - Duration::minutes(1)), now()),
            "1 minute ago"
        );
    }

    #[test]
    fn time_ago_sub_minute_is_just_now() {
        let ts = now() - Duration::seconds(20);
        assert_eq!(format_time_ago(Some(ts), now()), "just now");
    }
}
