//! OAuth provider registry and authorization-code exchange.
//!
//! Providers are configured entirely from the environment; the service only
//! needs the three standard endpoints (authorize, token, userinfo) plus
//! client credentials. The callback handler exchanges the code for an access
//! token and reads the user's email/name from the userinfo endpoint.

use serde::Deserialize;
use talentscope_core::error::CoreError;

/// Identity resolved from a provider's userinfo endpoint.
#[derive(Debug, Clone)]
pub struct OAuthIdentity {
    pub subject: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// One configured OAuth provider.
#[derive(Debug, Clone)]
pub struct OAuthProvider {
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_url: String,
    /// Space-separated scopes requested at authorization.
    pub scopes: String,
}

impl OAuthProvider {
    /// Load a provider's settings from `OAUTH_<NAME>_*` environment variables.
    ///
    /// | Env Var (suffix)  | Required | Default                |
    /// |-------------------|----------|------------------------|
    /// | `CLIENT_ID`       | **yes**  | --                     |
    /// | `CLIENT_SECRET`   | **yes**  | --                     |
    /// | `AUTHORIZE_URL`   | **yes**  | --                     |
    /// | `TOKEN_URL`       | **yes**  | --                     |
    /// | `USERINFO_URL`    | **yes**  | --                     |
    /// | `REDIRECT_URL`    | **yes**  | --                     |
    /// | `SCOPES`          | no       | `openid email profile` |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing; a half-configured provider
    /// is a deployment error.
    pub fn from_env(name: &str) -> Self {
        let prefix = format!("OAUTH_{}_", name.to_uppercase());
        let require = |suffix: &str| {
            let var = format!("{prefix}{suffix}");
            std::env::var(&var).unwrap_or_else(|_| panic!("{var} must be set"))
        };

        Self {
            name: name.to_string(),
            client_id: require("CLIENT_ID"),
            client_secret: require("CLIENT_SECRET"),
            authorize_url: require("AUTHORIZE_URL"),
            token_url: require("TOKEN_URL"),
            userinfo_url: require("USERINFO_URL"),
            redirect_url: require("REDIRECT_URL"),
            scopes: std::env::var(format!("{prefix}SCOPES"))
                .unwrap_or_else(|_| "openid email profile".into()),
        }
    }

    /// Build the provider's authorization URL for the browser redirect.
    pub fn build_authorize_url(&self, state: &str) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}",
            self.authorize_url,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_url),
            urlencoding::encode(&self.scopes),
            urlencoding::encode(state),
        )
    }

    /// Exchange an authorization code for the user's identity.
    ///
    /// Performs the token POST and the userinfo GET; any transport or shape
    /// failure surfaces as [`CoreError::Unauthorized`] since the code is the
    /// only credential involved.
    pub async fn exchange_code(
        &self,
        http: &reqwest::Client,
        code: &str,
    ) -> Result<OAuthIdentity, CoreError> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let token: TokenResponse = http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CoreError::Unauthorized(format!("OAuth token exchange failed: {e}")))?
            .error_for_status()
            .map_err(|e| CoreError::Unauthorized(format!("OAuth token exchange rejected: {e}")))?
            .json()
            .await
            .map_err(|e| CoreError::Unauthorized(format!("Malformed OAuth token response: {e}")))?;

        let userinfo: serde_json::Value = http
            .get(&self.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| CoreError::Unauthorized(format!("OAuth userinfo fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| CoreError::Unauthorized(format!("OAuth userinfo rejected: {e}")))?
            .json()
            .await
            .map_err(|e| CoreError::Unauthorized(format!("Malformed OAuth userinfo: {e}")))?;

        parse_identity(&userinfo)
    }
}

/// Pull the subject/email/name triple out of a userinfo document.
///
/// Providers disagree on field names; `sub`/`id` and `name` cover the common
/// ones. A missing email is a hard failure: accounts are keyed by email.
fn parse_identity(userinfo: &serde_json::Value) -> Result<OAuthIdentity, CoreError> {
    let subject = userinfo
        .get("sub")
        .or_else(|| userinfo.get("id"))
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .ok_or_else(|| CoreError::Unauthorized("OAuth userinfo has no subject".into()))?;

    let email = userinfo
        .get("email")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Unauthorized("OAuth userinfo has no email".into()))?
        .to_string();

    let full_name = userinfo
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Ok(OAuthIdentity {
        subject,
        email,
        full_name,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn test_provider() -> OAuthProvider {
        OAuthProvider {
            name: "google".into(),
            client_id: "client-123".into(),
            client_secret: "secret".into(),
            authorize_url: "https://accounts.example.com/authorize".into(),
            token_url: "https://accounts.example.com/token".into(),
            userinfo_url: "https://accounts.example.com/userinfo".into(),
            redirect_url: "https://app.example.com/auth/oauth/google/callback".into(),
            scopes: "openid email profile".into(),
        }
    }

    #[test]
    fn authorize_url_encodes_params() {
        let url = test_provider().build_authorize_url("xyz");
        assert!(url.starts_with("https://accounts.example.com/authorize?response_type=code"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(url.contains(
            "redirect_uri=https%3A%2F%2Fapp.example.com%2Fauth%2Foauth%2Fgoogle%2Fcallback"
        ));
        assert!(url.ends_with("state=xyz"));
    }

    #[test]
    fn identity_from_standard_userinfo() {
        let doc = serde_json::json!({
            "sub": "abc123",
            "email": "jane@example.com",
            "name": "Jane Doe"
        });
        let identity = parse_identity(&doc).unwrap();
        assert_eq!(identity.subject, "abc123");
        assert_eq!(identity.email, "jane@example.com");
        assert_eq!(identity.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn identity_accepts_numeric_id() {
        let doc = serde_json::json!({ "id": 9001, "email": "j@example.com" });
        let identity = parse_identity(&doc).unwrap();
        assert_eq!(identity.subject, "9001");
        assert!(identity.full_name.is_none());
    }

    #[test]
    fn identity_requires_email() {
        let doc = serde_json::json!({ "sub": "abc" });
        assert_matches!(parse_identity(&doc), Err(CoreError::Unauthorized(_)));
    }
}
