/// Configuration loaded from environment variables
use std::net::SocketAddr;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::constants::{DEFAULT_FEED_URL, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEZONE};
use crate::feed::FeedSource;
use crate::utils::timezone::{parse_timezone, TimezoneError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
    #[error("HOST:PORT is not a valid socket address: {0}")]
    InvalidAddress(String),
    #[error(transparent)]
    Timezone(#[from] TimezoneError),
    #[error("FEED_REFRESH_CRON is not a valid cron expression '{expression}': {reason}")]
    InvalidCron { expression: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedSource,
    pub addr: SocketAddr,
    pub timezone: Tz,
    pub refresh: Option<cron::Schedule>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed_url = lookup("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };
        let addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress(format!("{}:{}", host, port)))?;

        let timezone =
            parse_timezone(&lookup("TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()))?;

        // Optional: periodic feed reload
        let refresh = lookup("FEED_REFRESH_CRON")
            .filter(|expression| !expression.trim().is_empty())
            .map(|expression| {
                cron::Schedule::from_str(expression.trim()).map_err(|e| ConfigError::InvalidCron {
                    expression: expression.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            feed: FeedSource::parse(&feed_url),
            addr,
            timezone,
            refresh,
        })
    }
}
