use std::collections::HashMap;
use std::env;

use tracing::info;

use crate::types::Credentials;

/// Default minimum interval between provider calls, per source.
pub const DEFAULT_RATE_LIMIT_SECS: u64 = 1;

/// Default HTTP client timeout.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
///
/// Provider credentials are optional on purpose: a source with no
/// credentials configures itself into a disabled mode instead of failing,
/// so one missing key never takes down an enumeration run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Per-source credential pairs, keyed by source name.
    credentials: HashMap<String, Credentials>,

    /// Minimum seconds between provider calls for one source.
    pub rate_limit_secs: u64,

    /// HTTP client timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Credentials follow the `<SOURCE>_USERNAME` / `<SOURCE>_PASSWORD`
    /// convention; both must be set for the pair to be recorded.
    pub fn from_env() -> Self {
        let mut credentials = HashMap::new();
        for source in ["CIRCL"] {
            if let (Ok(username), Ok(password)) = (
                env::var(format!("{source}_USERNAME")),
                env::var(format!("{source}_PASSWORD")),
            ) {
                credentials.insert(source.to_string(), Credentials { username, password });
            }
        }

        Self {
            credentials,
            rate_limit_secs: optional_u64("RATE_LIMIT_SECS", DEFAULT_RATE_LIMIT_SECS),
            http_timeout_secs: optional_u64("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    /// Build a config directly from parts. Used by tests and embedders that
    /// do not read the process environment.
    pub fn with_credentials(pairs: impl IntoIterator<Item = (String, Credentials)>) -> Self {
        Self {
            credentials: pairs.into_iter().collect(),
            rate_limit_secs: DEFAULT_RATE_LIMIT_SECS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    /// Look up the credential pair for a source by name.
    pub fn credentials(&self, source: &str) -> Option<&Credentials> {
        self.credentials.get(source)
    }

    /// Log which sources have credentials without leaking the values.
    pub fn log_redacted(&self) {
        let mut configured: Vec<&str> = self.credentials.keys().map(String::as_str).collect();
        configured.sort_unstable();
        info!(
            sources = ?configured,
            rate_limit_secs = self.rate_limit_secs,
            http_timeout_secs = self.http_timeout_secs,
            "Config loaded"
        );
    }
}

fn optional_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_lookup_by_source_name() {
        let config = Config::with_credentials([(
            "CIRCL".to_string(),
            Credentials {
                username: "user".to_string(),
                password: "pass".to_string(),
            },
        )]);

        assert!(config.credentials("CIRCL").is_some());
        assert!(config.credentials("OTHER").is_none());
    }
}
