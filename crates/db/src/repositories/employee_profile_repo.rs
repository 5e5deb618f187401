//! Repository for the `employee_profiles` table.

use sqlx::PgPool;

use crate::models::founder_profile::ProfileDisplay;

/// Read operations for employee profiles.
pub struct EmployeeProfileRepo;

impl EmployeeProfileRepo {
    /// Display projection for enrichment, keyed by linkedin URL (employees
    /// have no internal id on status-update events).
    pub async fn find_display_by_linkedin(
        pool: &PgPool,
        linkedin_url: &str,
    ) -> Result<Option<ProfileDisplay>, sqlx::Error> {
        sqlx::query_as::<_, ProfileDisplay>(
            "SELECT full_name, current_company AS company FROM employee_profiles
             WHERE linkedin_url = $1",
        )
        .bind(linkedin_url)
        .fetch_optional(pool)
        .await
    }
}
