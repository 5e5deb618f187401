//! Status-update enrichment: resolve display fields before the feed renders.
//!
//! Each raw event carries either a founder `profile_id` or an employee
//! `linkedin_url`; exactly one secondary lookup runs per record, against the
//! table that identifier belongs to. Failures degrade to fallback display
//! values and never abort the batch.

use futures::future::join_all;
use talentscope_core::cache::{profile_cache_key, QueryCache};
use talentscope_core::enrichment::{display_fields, ProfileDetails};
use talentscope_core::formatting::{format_status, format_time_ago, status_badge_variant};
use talentscope_core::types::Timestamp;
use talentscope_db::models::{EnrichedStatusUpdate, StatusUpdate};
use talentscope_db::repositories::{EmployeeProfileRepo, FounderProfileRepo};
use talentscope_db::DbPool;

/// Enrich a batch of status updates.
///
/// Lookups run concurrently (one per record) and are joined before
/// returning; no record's result depends on another's.
pub async fn enrich_batch(
    pool: &DbPool,
    cache: &QueryCache,
    updates: Vec<StatusUpdate>,
) -> Vec<EnrichedStatusUpdate> {
    let now = chrono::Utc::now();
    join_all(
        updates
            .into_iter()
            .map(|update| enrich_one(pool, cache, update, now)),
    )
    .await
}

async fn enrich_one(
    pool: &DbPool,
    cache: &QueryCache,
    update: StatusUpdate,
    now: Timestamp,
) -> EnrichedStatusUpdate {
    let details = lookup_details(pool, cache, &update).await;
    apply_details(update, details, now)
}

/// Resolve profile details for one record, consulting the cache first.
///
/// Branches once on the identifier kind; each branch queries exactly one
/// table. Errors are logged and collapse to `None` (fallbacks apply).
async fn lookup_details(
    pool: &DbPool,
    cache: &QueryCache,
    update: &StatusUpdate,
) -> Option<ProfileDetails> {
    if let Some(profile_id) = update.profile_id {
        let key = profile_cache_key(&profile_id.to_string());
        if let Some(cached) = cache.get::<ProfileDetails>(&key) {
            return Some(cached);
        }

        match FounderProfileRepo::find_display_by_id(pool, profile_id).await {
            Ok(Some(display)) => {
                let details: ProfileDetails = display.into();
                cache.set(&key, &details, None);
                Some(details)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(profile_id, error = %err, "Founder lookup failed during enrichment");
                None
            }
        }
    } else {
        let key = profile_cache_key(&update.linkedin_url);
        if let Some(cached) = cache.get::<ProfileDetails>(&key) {
            return Some(cached);
        }

        match EmployeeProfileRepo::find_display_by_linkedin(pool, &update.linkedin_url).await {
            Ok(Some(display)) => {
                let details: ProfileDetails = display.into();
                cache.set(&key, &details, None);
                Some(details)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(
                    linkedin_url = %update.linkedin_url,
                    error = %err,
                    "Employee lookup failed during enrichment"
                );
                None
            }
        }
    }
}

/// Merge an optional lookup result into the event. `None` (miss or failure)
/// yields the fallback display values.
fn apply_details(
    update: StatusUpdate,
    details: Option<ProfileDetails>,
    now: Timestamp,
) -> EnrichedStatusUpdate {
    let (full_name, company, avatar_url) = display_fields(details.as_ref());
    let new_status_display = format_status(&update.new_status);
    let badge_variant = status_badge_variant(&update.new_status);
    let time_ago = format_time_ago(Some(update.timestamp), now);
    EnrichedStatusUpdate {
        id: update.id,
        profile_id: update.profile_id,
        linkedin_url: update.linkedin_url,
        old_status: update.old_status,
        new_status: update.new_status,
        prev_role: update.prev_role.0,
        curr_role: update.curr_role.0,
        timestamp: update.timestamp,
        full_name,
        company,
        avatar_url,
        new_status_display,
        badge_variant,
        time_ago,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use sqlx::types::Json;
    use talentscope_core::enrichment::{UNKNOWN_COMPANY, UNKNOWN_USER};
    use talentscope_db::models::Role;

    use super::*;

    fn update(id: i64, days_ago: i64) -> StatusUpdate {
        StatusUpdate {
            id,
            profile_id: Some(id),
            linkedin_url: format!("https://linkedin.com/in/user-{id}"),
            old_status: "currently_employed".into(),
            new_status: "stealth".into(),
            prev_role: Json(Role {
                title: "Engineer".into(),
                company: "Acme".into(),
            }),
            curr_role: Json(Role {
                title: "Founder".into(),
                company: "Stealth".into(),
            }),
            timestamp: Utc::now() - Duration::days(days_ago),
        }
    }

    fn details(name: &str) -> ProfileDetails {
        ProfileDetails {
            full_name: name.into(),
            company: Some("Acme".into()),
        }
    }

    #[test]
    fn resolved_details_are_merged() {
        let enriched = apply_details(update(1, 2), Some(details("Jane Doe")), Utc::now());
        assert_eq!(enriched.full_name, "Jane Doe");
        assert_eq!(enriched.company, "Acme");
        assert!(enriched.avatar_url.contains("seed=Jane%20Doe"));
        assert_eq!(enriched.prev_role.title, "Engineer");
    }

    #[test]
    fn display_fields_are_derived_from_the_transition() {
        let enriched = apply_details(update(1, 2), Some(details("Jane Doe")), Utc::now());
        assert_eq!(enriched.new_status_display, "Stealth");
        assert_eq!(
            enriched.badge_variant,
            talentscope_core::formatting::StatusBadgeVariant::Success
        );
        assert_eq!(enriched.time_ago, "2 days ago");
    }

    #[test]
    fn failed_lookup_falls_back_without_dropping_the_record() {
        let enriched = apply_details(update(7, 1), None, Utc::now());
        assert_eq!(enriched.id, 7);
        assert_eq!(enriched.full_name, UNKNOWN_USER);
        assert_eq!(enriched.company, UNKNOWN_COMPANY);
        assert!(enriched.avatar_url.contains("seed=Unknown"));
    }

    #[test]
    fn batch_of_five_with_one_failure_keeps_all_five() {
        // Records span a three-month window; record 3's lookup failed.
        let lookups = [
            Some(details("A One")),
            Some(details("B Two")),
            None,
            Some(details("D Four")),
            Some(details("E Five")),
        ];

        let now = Utc::now();
        let enriched: Vec<_> = (0..5)
            .map(|i| apply_details(update(i as i64 + 1, i as i64 * 20), lookups[i].clone(), now))
            .collect();

        assert_eq!(enriched.len(), 5);
        assert_eq!(enriched[2].full_name, UNKNOWN_USER);
        assert_eq!(enriched[2].company, UNKNOWN_COMPANY);
        assert_eq!(enriched[0].full_name, "A One");
        assert_eq!(enriched[4].full_name, "E Five");
    }
}
