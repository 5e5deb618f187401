//! Tenure (duration) parsing for profile experience entries.
//!
//! Experience rows carry a free-text duration like `"2 yrs 3 mos"`. The
//! fan-out search sorts merged results by this value, so parsing must be
//! total: anything unrecognizable scores zero rather than erroring.

use std::sync::OnceLock;

use regex::Regex;

fn year_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s+yr(s)?").expect("year pattern is valid"))
}

fn month_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s+mo(s)?").expect("month pattern is valid"))
}

/// Parse a free-text duration into total months.
///
/// Recognizes a `<N> yr(s)` component and a `<N> mo(s)` component; either may
/// be absent. `"2 yrs 3 mos"` -> 27, `"5 mos"` -> 5, `"3 yrs"` -> 36.
/// Empty or unparseable input -> 0.
pub fn parse_duration_months(duration: &str) -> u32 {
    let mut total: u32 = 0;

    if let Some(caps) = year_pattern().captures(duration) {
        if let Ok(years) = caps[1].parse::<u32>() {
            total = total.saturating_add(years.saturating_mul(12));
        }
    }
    if let Some(caps) = month_pattern().captures(duration) {
        if let Ok(months) = caps[1].parse::<u32>() {
            total = total.saturating_add(months);
        }
    }

    total
}

/// Tenure score for sorting: months parsed from an optional duration string.
///
/// Profiles with no experience or an unparseable duration score 0 and sort
/// last under the descending sort.
pub fn tenure_score(first_experience_duration: Option<&str>) -> u32 {
    first_experience_duration
        .map(parse_duration_months)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_years_and_months() {
        assert_eq!(parse_duration_months("2 yrs 3 mos"), 27);
    }

    #[test]
    fn parses_months_only() {
        assert_eq!(parse_duration_months("5 mos"), 5);
    }

    #[test]
    fn parses_years_only() {
        assert_eq!(parse_duration_months("3 yrs"), 36);
    }

    #[test]
    fn parses_singular_units() {
        assert_eq!(parse_duration_months("1 yr 1 mo"), 13);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(parse_duration_months(""), 0);
    }

    #[test]
    fn unparseable_input_scores_zero() {
        assert_eq!(parse_duration_months("since forever"), 0);
    }

    #[test]
    fn missing_experience_scores_zero() {
        assert_eq!(tenure_score(None), 0);
        assert_eq!(tenure_score(Some("4 yrs")), 48);
    }
}
