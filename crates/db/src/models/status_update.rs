//! Status-update event model and the enriched view the API returns.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use talentscope_core::formatting::StatusBadgeVariant;
use talentscope_core::types::{DbId, Timestamp};

/// A `{title, company}` role pair recorded on a status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
}

/// A person's employment-status transition event.
///
/// `profile_id` is present iff the subject is a founder-type record;
/// otherwise `linkedin_url` is the lookup key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusUpdate {
    pub id: DbId,
    pub profile_id: Option<DbId>,
    pub linkedin_url: String,
    pub old_status: String,
    pub new_status: String,
    pub prev_role: Json<Role>,
    pub curr_role: Json<Role>,
    pub timestamp: Timestamp,
}

/// A status update merged with resolved display fields.
///
/// This is an in-memory view model; it is never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedStatusUpdate {
    pub id: DbId,
    pub profile_id: Option<DbId>,
    pub linkedin_url: String,
    pub old_status: String,
    pub new_status: String,
    pub prev_role: Role,
    pub curr_role: Role,
    pub timestamp: Timestamp,
    /// Resolved name, or `"Unknown User"` when the lookup missed.
    pub full_name: String,
    /// Resolved company, or `"Unknown Company"` when the lookup missed.
    pub company: String,
    /// Deterministic generated avatar, seeded by the resolved name.
    pub avatar_url: String,
    /// Title-cased `new_status` ("laid_off" -> "Laid Off").
    pub new_status_display: String,
    /// Badge severity for `new_status`.
    pub badge_variant: StatusBadgeVariant,
    /// Relative phrase for `timestamp` ("3 days ago").
    pub time_ago: String,
}
