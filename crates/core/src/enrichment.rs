//! Display rules for enriching status-update events with profile details.
//!
//! A raw status update carries only identifiers; before display it is merged
//! with the person's resolved name and company plus a generated avatar URL.
//! Lookup failures never abort a batch: fallbacks apply per record.

/// Shown when the profile lookup failed or matched nothing.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Shown when no company could be resolved.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Avatar seed used when no name resolved.
pub const UNKNOWN_AVATAR_SEED: &str = "Unknown";

/// Avatar service endpoint; the seed determines the generated face.
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Profile details resolved from a secondary lookup (founder table by id, or
/// employee table by linkedin url).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProfileDetails {
    pub full_name: String,
    /// `search_company` for founders, `current_company` for employees.
    pub company: Option<String>,
}

/// Deterministic avatar URL seeded by the resolved name.
pub fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}{}", urlencoding::encode(seed))
}

/// Resolve the display triple (name, company, avatar URL) from an optional
/// lookup result. `None` means the lookup missed or failed.
pub fn display_fields(details: Option<&ProfileDetails>) -> (String, String, String) {
    match details {
        Some(d) => {
            let company = d
                .company
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
            let avatar = avatar_url(&d.full_name);
            (d.full_name.clone(), company, avatar)
        }
        None => (
            UNKNOWN_USER.to_string(),
            UNKNOWN_COMPANY.to_string(),
            avatar_url(UNKNOWN_AVATAR_SEED),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_encodes_seed() {
        assert_eq!(
            avatar_url("Jane Doe"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Jane%20Doe"
        );
    }

    #[test]
    fn avatar_url_encodes_reserved_and_non_ascii() {
        assert_eq!(
            avatar_url("Zoë & Co"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Zo%C3%AB%20%26%20Co"
        );
    }

    #[test]
    fn display_fields_from_resolved_details() {
        let details = ProfileDetails {
            full_name: "Jane Doe".into(),
            company: Some("Acme".into()),
        };
        let (name, company, avatar) = display_fields(Some(&details));
        assert_eq!(name, "Jane Doe");
        assert_eq!(company, "Acme");
        assert!(avatar.ends_with("seed=Jane%20Doe"));
    }

    #[test]
    fn display_fields_fall_back_on_miss() {
        let (name, company, avatar) = display_fields(None);
        assert_eq!(name, UNKNOWN_USER);
        assert_eq!(company, UNKNOWN_COMPANY);
        assert!(avatar.ends_with("seed=Unknown"));
    }

    #[test]
    fn missing_company_falls_back_even_when_name_resolved() {
        let details = ProfileDetails {
            full_name: "Jane Doe".into(),
            company: None,
        };
        let (name, company, _) = display_fields(Some(&details));
        assert_eq!(name, "Jane Doe");
        assert_eq!(company, UNKNOWN_COMPANY);
    }
}
