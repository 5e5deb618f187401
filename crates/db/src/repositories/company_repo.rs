//! Repository for the `companies` table.

use sqlx::PgPool;

/// Read operations for the tracked-company listing.
pub struct CompanyRepo;

impl CompanyRepo {
    /// All company names, ascending. Feeds the search page's picker.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM companies ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }
}
