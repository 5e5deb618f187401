use std::collections::HashMap;

use crate::auth::jwt::JwtConfig;
use crate::auth::oauth::OAuthProvider;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Pause between per-company queries of the fan-out search, in
    /// milliseconds (default: `0`). Raise it to throttle against rate-limited
    /// data sources.
    pub search_fanout_delay_ms: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// OAuth providers keyed by name (e.g. `"google"`).
    pub oauth_providers: HashMap<String, OAuthProvider>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:3001` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `SEARCH_FANOUT_DELAY_MS` | `0`                     |
    /// | `OAUTH_PROVIDERS`        | (empty)                 |
    ///
    /// OAuth providers listed in `OAUTH_PROVIDERS` (comma-separated) are each
    /// configured via `OAUTH_<NAME>_*` variables; see [`OAuthProvider::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let search_fanout_delay_ms: u64 = std::env::var("SEARCH_FANOUT_DELAY_MS")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("SEARCH_FANOUT_DELAY_MS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let oauth_providers = std::env::var("OAUTH_PROVIDERS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|name| (name.to_string(), OAuthProvider::from_env(name)))
            .collect();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            search_fanout_delay_ms,
            jwt,
            oauth_providers,
        }
    }
}
