use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    CORS_ALLOWED_ORIGINS, DEFAULT_PORT, MAX_BODY_SIZE_BYTES, RATE_LIMIT_BURST,
    RATE_LIMIT_PER_MINUTE, REQUEST_TIMEOUT_SECS, ROUTES_API_PORT, SHUTDOWN_TIMEOUT_SECS,
};

/// Reads `key` and parses it, falling back to `default` when the variable
/// is missing or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                env_var = key,
                value = %raw,
                "ignoring malformed value in configuration"
            );
            default
        }),
        Err(_) => default,
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone)]
pub struct MiddlewareConfig {
    pub port: u16,
    pub rate_limit_per_minute: u32,
    pub rate_limit_burst: u32,
    pub request_timeout: Duration,
    pub max_body_size: usize,
    pub shutdown_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rate_limit_per_minute: 600,
            rate_limit_burst: 100,
            request_timeout: Duration::from_secs(30),
            max_body_size: 1_048_576, // 1MB
            shutdown_timeout: Duration::from_secs(30),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl MiddlewareConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let cors_allowed_origins = std::env::var(CORS_ALLOWED_ORIGINS)
            .ok()
            .map(|v| parse_origins(&v))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(default.cors_allowed_origins);

        Self {
            port: env_or(ROUTES_API_PORT, default.port),
            // Zero would make the replenish interval undefined.
            rate_limit_per_minute: env_or(RATE_LIMIT_PER_MINUTE, default.rate_limit_per_minute)
                .max(1),
            rate_limit_burst: env_or(RATE_LIMIT_BURST, default.rate_limit_burst).max(1),
            request_timeout: Duration::from_secs(env_or(
                REQUEST_TIMEOUT_SECS,
                default.request_timeout.as_secs(),
            )),
            max_body_size: env_or(MAX_BODY_SIZE_BYTES, default.max_body_size),
            shutdown_timeout: Duration::from_secs(env_or(
                SHUTDOWN_TIMEOUT_SECS,
                default.shutdown_timeout.as_secs(),
            )),
            cors_allowed_origins,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }

    /// Milliseconds between replenished rate limit permits.
    pub fn replenish_interval_ms(&self) -> u64 {
        (60_000 / u64::from(self.rate_limit_per_minute)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" https://a.example , ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_replenish_interval() {
        let config = MiddlewareConfig {
            rate_limit_per_minute: 120,
            ..MiddlewareConfig::default()
        };
        assert_eq!(config.replenish_interval_ms(), 500);

        let config = MiddlewareConfig {
            rate_limit_per_minute: 120_000,
            ..MiddlewareConfig::default()
        };
        assert_eq!(config.replenish_interval_ms(), 1);
    }

    // Env vars are process-global, so every case lives in one test.
    #[test]
    fn test_middleware_config_from_env() {
        std::env::remove_var(ROUTES_API_PORT);
        std::env::remove_var(REQUEST_TIMEOUT_SECS);
        std::env::remove_var(CORS_ALLOWED_ORIGINS);
        std::env::remove_var(RATE_LIMIT_PER_MINUTE);

        let config = MiddlewareConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.allows_any_origin());

        std::env::set_var(ROUTES_API_PORT, "8080");
        std::env::set_var(REQUEST_TIMEOUT_SECS, "not-a-number");
        std::env::set_var(CORS_ALLOWED_ORIGINS, "https://app.example");
        std::env::set_var(RATE_LIMIT_PER_MINUTE, "0");

        let config = MiddlewareConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allowed_origins, vec!["https://app.example"]);
        assert!(!config.allows_any_origin());
        assert_eq!(config.rate_limit_per_minute, 1);

        std::env::remove_var(ROUTES_API_PORT);
        std::env::remove_var(REQUEST_TIMEOUT_SECS);
        std::env::remove_var(CORS_ALLOWED_ORIGINS);
        std::env::remove_var(RATE_LIMIT_PER_MINUTE);
    }
}
