use std::env;

use crate::adapters::DEFAULT_MAX_BODY_BYTES;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Cap on the upstream response body
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from `.env` in the working directory (if present)
    /// and the process environment. Parent directories are not searched.
    ///
    /// Variables already set in the environment win over the `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_path(".env").ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) if !value.is_empty() => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            _ => return Err(ConfigError::MissingPort),
        };

        let max_body_bytes = match lookup("FEED_MAX_BODY_BYTES") {
            Some(value) if !value.is_empty() => match value.parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => return Err(ConfigError::InvalidMaxBodyBytes(value)),
            },
            _ => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            port,
            max_body_bytes,
        })
    }
}

/// The feed URL is the first positional argument
pub fn feed_url_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().nth(1)
}
