use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_FEED_URL: &str = "https://empllo.com/api/v1";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub feed_timeout: Duration,
    pub submit_delay: Duration,
    /// Idle application sessions older than this are dropped.
    pub session_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: DEFAULT_FEED_URL.to_string(),
            feed_timeout: Duration::from_secs(15),
            submit_delay: Duration::from_millis(800),
            session_ttl: Duration::from_secs(30 * 60),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            feed_url: std::env::var("FEED_URL").unwrap_or(defaults.feed_url),
            feed_timeout: Duration::from_secs(parse_env(
                "FEED_TIMEOUT_SECS",
                defaults.feed_timeout.as_secs(),
            )?),
            submit_delay: Duration::from_millis(parse_env(
                "SUBMIT_DELAY_MS",
                defaults.submit_delay.as_millis() as u64,
            )?),
            session_ttl: Duration::from_secs(parse_env(
                "SESSION_TTL_SECS",
                defaults.session_ttl.as_secs(),
            )?),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_feed_contract() {
        let config = Config::default();
        assert_eq!(config.feed_url, "https://empllo.com/api/v1");
        assert_eq!(config.feed_timeout, Duration::from_secs(15));
        assert_eq!(config.submit_delay, Duration::from_millis(800));
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u64 = parse_env("JOBBOARD_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
