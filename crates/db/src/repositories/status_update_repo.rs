//! Repository for the `status_updates` table.

use sqlx::PgPool;
use talentscope_core::types::Timestamp;

use crate::models::status_update::StatusUpdate;

const COLUMNS: &str =
    "id, profile_id, linkedin_url, old_status, new_status, prev_role, curr_role, \"timestamp\"";

/// Read operations for status-update events.
pub struct StatusUpdateRepo;

impl StatusUpdateRepo {
    /// Events since `since`, newest first, excluding transitions into
    /// `currently_employed` (the feed only shows people who left).
    ///
    /// A `None` limit fetches the whole window (`LIMIT NULL` is `LIMIT ALL`
    /// in PostgreSQL).
    pub async fn list_recent(
        pool: &PgPool,
        since: Timestamp,
        limit: Option<i64>,
    ) -> Result<Vec<StatusUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM status_updates
             WHERE \"timestamp\" >= $1
               AND new_status <> 'currently_employed'
             ORDER BY \"timestamp\" DESC
             LIMIT $2"
        );

        sqlx::query_as::<_, StatusUpdate>(&query)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
