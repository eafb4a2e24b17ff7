use std::{net::SocketAddr, num::ParseIntError, time::Duration};

use thiserror::Error;
use utils_trace::{LogFormat, ParseLogFormatError};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MARKET_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_RATES_URL: &str = "https://www.cbr-xml-daily.ru/daily_json.js";
pub const DEFAULT_MARKET_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RATES_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Where the fetchers go and how long they wait.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub market_url: String,
    pub rates_url: String,
    pub market_timeout: Duration,
    pub rates_timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("InvalidAddr: {key}={value}: {source}")]
    InvalidAddr {
        key: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("InvalidTimeout: {key}={value}: {source}")]
    InvalidTimeout {
        key: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("ZeroTimeout: {key} must be at least 1 second")]
    ZeroTimeout {
        key: &'static str,
    },

    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[from]
        source: ParseLogFormatError,
    },
}

impl Config {
    /// Reads `MONITOR_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let addr_value = get("MONITOR_ADDR", DEFAULT_ADDR);
        let addr = addr_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                key: "MONITOR_ADDR",
                value: addr_value.clone(),
                source,
            })?;

        let log_format = match lookup("MONITOR_LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let market_timeout = parse_secs(&lookup, "MONITOR_MARKET_TIMEOUT_SECS", DEFAULT_MARKET_TIMEOUT_SECS)?;
        let rates_timeout = parse_secs(&lookup, "MONITOR_RATES_TIMEOUT_SECS", DEFAULT_RATES_TIMEOUT_SECS)?;

        Ok(Config {
            addr,
            log_level: get("MONITOR_LOG", DEFAULT_LOG_LEVEL),
            log_format,
            upstream: UpstreamConfig {
                market_url: get("MONITOR_MARKET_URL", DEFAULT_MARKET_URL),
                rates_url: get("MONITOR_RATES_URL", DEFAULT_RATES_URL),
                market_timeout,
                rates_timeout,
                user_agent: get("MONITOR_USER_AGENT", DEFAULT_USER_AGENT),
            },
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidTimeout { key, value, source })?,
        None => default,
    };

    // reqwest treats a zero timeout as already expired
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout { key });
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() -> anyhow::Result<()> {
        let config = config_from(&[])?;
        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.upstream.market_url, DEFAULT_MARKET_URL);
        assert_eq!(config.upstream.rates_url, DEFAULT_RATES_URL);
        assert_eq!(config.upstream.rates_timeout, Duration::from_secs(3));
        assert_eq!(config.upstream.market_timeout, Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn overrides_are_applied() -> anyhow::Result<()> {
        let config = config_from(&[
            ("MONITOR_ADDR", "127.0.0.1:9090"),
            ("MONITOR_LOG_FORMAT", "pretty"),
            ("MONITOR_RATES_TIMEOUT_SECS", "1"),
            ("MONITOR_MARKET_URL", "http://127.0.0.1:1"),
        ])?;
        assert_eq!(config.addr.to_string(), "127.0.0.1:9090");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.upstream.rates_timeout, Duration::from_secs(1));
        assert_eq!(config.upstream.market_url, "http://127.0.0.1:1");
        Ok(())
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            config_from(&[("MONITOR_ADDR", "localhost")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            config_from(&[("MONITOR_MARKET_TIMEOUT_SECS", "ten")]),
            Err(ConfigError::InvalidTimeout { key: "MONITOR_MARKET_TIMEOUT_SECS", .. })
        ));
        assert!(matches!(
            config_from(&[("MONITOR_RATES_TIMEOUT_SECS", "0")]),
            Err(ConfigError::ZeroTimeout { key: "MONITOR_RATES_TIMEOUT_SECS" })
        ));
        assert!(matches!(
            config_from(&[("MONITOR_MARKET_TIMEOUT_SECS", " 0 ")]),
            Err(ConfigError::ZeroTimeout { key: "MONITOR_MARKET_TIMEOUT_SECS" })
        ));
        assert!(matches!(
            config_from(&[("MONITOR_LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidLogFormat { .. })
        ));
    }
}
