//! Founder profile entity model and search DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use talentscope_core::enrichment::ProfileDetails;
use talentscope_core::types::{DbId, Timestamp};

/// One experience entry in a profile's ordered work history.
///
/// `duration` is free text (e.g. `"2 yrs 3 mos"`); the search sort parses it
/// via `talentscope_core::tenure`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub date_range: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// One education entry in a profile's ordered education history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub date_range: Option<String>,
}

/// A founder profile row from the `founder_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FounderProfile {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub linkedin_url: String,
    pub experience: Json<Vec<Experience>>,
    pub education: Json<Vec<Education>>,
    pub location: Option<String>,
    /// One of `stealth`, `building_in_public`, `recently_quit` (DB CHECK).
    pub profile_status: String,
    pub status_confidence_label: Option<String>,
    pub is_senior_operator: bool,
    pub is_repeat_founder: bool,
    pub search_company: Option<String>,
    pub role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FounderProfile {
    /// Duration string of the most recent experience entry, if any.
    pub fn first_experience_duration(&self) -> Option<&str> {
        self.experience
            .first()
            .and_then(|exp| exp.duration.as_deref())
    }
}

/// A profile as returned by the fan-out talent search: the row plus the role
/// the person held at the company that produced this result.
#[derive(Debug, Clone, Serialize)]
pub struct TalentSearchHit {
    #[serde(flatten)]
    pub profile: FounderProfile,
    pub role_at_company_searched: Option<String>,
}

/// Minimal display projection used by status-update enrichment.
///
/// Both profile tables select into this shape: founders alias
/// `search_company AS company`, employees alias `current_company AS company`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileDisplay {
    pub full_name: String,
    pub company: Option<String>,
}

impl From<ProfileDisplay> for ProfileDetails {
    fn from(display: ProfileDisplay) -> Self {
        ProfileDetails {
            full_name: display.full_name,
            company: display.company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_tolerates_missing_duration() {
        let json = r#"[{"company": "Acme", "title": "CTO"}]"#;
        let entries: Vec<Experience> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].company, "Acme");
        assert!(entries[0].duration.is_none());
    }

    #[test]
    fn display_converts_to_details() {
        let display = ProfileDisplay {
            full_name: "Jane Doe".into(),
            company: Some("Acme".into()),
        };
        let details: ProfileDetails = display.into();
        assert_eq!(details.full_name, "Jane Doe");
        assert_eq!(details.company.as_deref(), Some("Acme"));
    }
}
