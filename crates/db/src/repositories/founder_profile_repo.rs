//! Repository for the `founder_profiles` table.

use sqlx::PgPool;
use talentscope_core::types::DbId;

use crate::models::founder_profile::{FounderProfile, ProfileDisplay};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, full_name, linkedin_url, experience, education, \
     location, profile_status, status_confidence_label, is_senior_operator, is_repeat_founder, \
     search_company, role, created_at, updated_at";

/// Filters applied to each per-company query of the fan-out search.
///
/// The company name itself is passed separately: the search issues one query
/// per selected company and merges client-side.
#[derive(Debug, Clone, Default)]
pub struct TalentSearchFilters {
    /// Subset of the fixed profile-status vocabulary; empty means no status
    /// narrowing.
    pub statuses: Vec<String>,
    pub repeat_founder_only: bool,
    pub senior_operator_only: bool,
    /// Free-text query matched against name, role, and company fields.
    pub query: Option<String>,
}

/// Read operations for founder profiles.
pub struct FounderProfileRepo;

impl FounderProfileRepo {
    /// Display projection for enrichment: name plus the company the profile
    /// was indexed under.
    pub async fn find_display_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProfileDisplay>, sqlx::Error> {
        sqlx::query_as::<_, ProfileDisplay>(
            "SELECT full_name, search_company AS company FROM founder_profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// One leg of the fan-out search: profiles whose `search_company`
    /// contains `company` (case-insensitive), narrowed by the active filters.
    ///
    /// Optional filters use the `NULL-or-match` bind pattern so the SQL stays
    /// static.
    pub async fn search_by_company(
        pool: &PgPool,
        company: &str,
        filters: &TalentSearchFilters,
    ) -> Result<Vec<FounderProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founder_profiles
             WHERE search_company ILIKE $1
               AND ($2::text[] IS NULL OR profile_status = ANY($2))
               AND (NOT $3 OR is_repeat_founder)
               AND (NOT $4 OR is_senior_operator)
               AND ($5::text IS NULL
                    OR first_name ILIKE $5
                    OR last_name ILIKE $5
                    OR role ILIKE $5
                    OR search_company ILIKE $5)"
        );

        let statuses: Option<Vec<String>> = if filters.statuses.is_empty() {
            None
        } else {
            Some(filters.statuses.clone())
        };
        let text_pattern = filters
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{q}%"));

        sqlx::query_as::<_, FounderProfile>(&query)
            .bind(format!("%{company}%"))
            .bind(statuses)
            .bind(filters.repeat_founder_only)
            .bind(filters.senior_operator_only)
            .bind(text_pattern)
            .fetch_all(pool)
            .await
    }

    /// Repeat founders, optionally narrowed by a name query, paginated and
    /// ordered by first name ascending.
    pub async fn list_repeat_founders(
        pool: &PgPool,
        name_query: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FounderProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM founder_profiles
             WHERE is_repeat_founder
               AND ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)
             ORDER BY first_name ASC
             LIMIT $2 OFFSET $3"
        );

        sqlx::query_as::<_, FounderProfile>(&query)
            .bind(name_pattern(name_query))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total repeat founders matching the same name filter, for pagination.
    pub async fn count_repeat_founders(
        pool: &PgPool,
        name_query: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM founder_profiles
             WHERE is_repeat_founder
               AND ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)",
        )
        .bind(name_pattern(name_query))
        .fetch_one(pool)
        .await
    }

    /// Total founder profiles tracked.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM founder_profiles")
            .fetch_one(pool)
            .await
    }

    /// Number of distinct companies profiles are indexed under.
    pub async fn distinct_company_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT search_company) FROM founder_profiles
             WHERE search_company IS NOT NULL",
        )
        .fetch_one(pool)
        .await
    }
}

fn name_pattern(name_query: Option<&str>) -> Option<String> {
    name_query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{q}%"))
}
