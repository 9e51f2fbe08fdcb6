//! Resolver configuration with environment overrides.

use chrono::Duration;

const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Minimum password length enforced at registration time only.
    pub min_password_len: usize,
    /// Validity window stamped on issued sessions.
    pub session_ttl: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl ResolverConfig {
    /// Read overrides from `RUTA_MIN_PASSWORD_LEN` and
    /// `RUTA_SESSION_TTL_SECS`; unset or unparseable values keep defaults.
    pub fn from_env() -> Self {
        let min_password_len = std::env::var("RUTA_MIN_PASSWORD_LEN")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MIN_PASSWORD_LEN);
        let ttl_secs = std::env::var("RUTA_SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);
        Self {
            min_password_len,
            session_ttl: Duration::seconds(ttl_secs),
        }
    }
}
