//! Configuration management for the top tracks relay.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Provider credentials, endpoint
//! URLs, the listen address and the relay's tunables all live here, so
//! nothing about the Spotify application is compiled into the binary.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use reqwest::Url;

use crate::types::TimeRange;

pub const DEFAULT_SPOTIFY_API_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_AUTH_SCOPE: &str = "user-top-read user-library-read user-read-playback-state user-read-playback-position user-read-recently-played user-read-currently-playing";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8001";
pub const DEFAULT_TOP_TRACKS_LIMIT: u8 = 10;
pub const MAX_TOP_TRACKS_LIMIT: u8 = 50;
pub const DEFAULT_OAUTH_STATE_TTL_SECS: u64 = 600;
pub const DEFAULT_OAUTH_STATE_CAPACITY: usize = 1024;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Loads environment variables from `.env` files.
///
/// Looks for `.env` in the current working directory first and then in the
/// platform-specific local data directory under `toptracks/.env`:
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// Both files are optional and variables already present in the process
/// environment are never overwritten. Returns the files that were loaded.
pub fn load_env() -> Vec<PathBuf> {
    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.push("toptracks/.env");

    [PathBuf::from(".env"), data_dir]
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| dotenv::from_path(path).is_ok())
        .collect()
}

/// Runtime settings of the relay.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub auth_url: Url,
    pub token_url: Url,
    pub api_url: Url,
    pub use_pkce: bool,
    pub server_address: String,
    pub top_tracks_limit: u8,
    pub time_range: TimeRange,
    pub state_ttl: Duration,
    pub state_capacity: usize,
    pub http_timeout: Duration,
}

impl Settings {
    /// Builds settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset, so a blank line in a `.env` file
    /// falls back to the default instead of failing validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let scopes: Vec<String> = get("SPOTIFY_API_AUTH_SCOPE")
            .unwrap_or_else(|| DEFAULT_SPOTIFY_API_AUTH_SCOPE.to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let top_tracks_limit: u8 = parse_or(&get, "TOP_TRACKS_LIMIT", DEFAULT_TOP_TRACKS_LIMIT)?;
        if top_tracks_limit == 0 || top_tracks_limit > MAX_TOP_TRACKS_LIMIT {
            return Err(ConfigError::Invalid {
                key: "TOP_TRACKS_LIMIT",
                value: top_tracks_limit.to_string(),
                reason: format!("must be between 1 and {MAX_TOP_TRACKS_LIMIT}"),
            });
        }

        let state_capacity: usize =
            parse_or(&get, "OAUTH_STATE_CAPACITY", DEFAULT_OAUTH_STATE_CAPACITY)?;
        if state_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "OAUTH_STATE_CAPACITY",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let http_timeout_secs: u64 = parse_or(&get, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        if http_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "HTTP_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Settings {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scopes,
            auth_url: url_or(&get, "SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_API_AUTH_URL)?,
            token_url: url_or(&get, "SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)?,
            api_url: url_or(&get, "SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)?,
            use_pkce: parse_or(&get, "SPOTIFY_API_USE_PKCE", false)?,
            server_address: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            top_tracks_limit,
            time_range: parse_or(&get, "TOP_TRACKS_TIME_RANGE", TimeRange::default())?,
            state_ttl: Duration::from_secs(parse_or(
                &get,
                "OAUTH_STATE_TTL_SECS",
                DEFAULT_OAUTH_STATE_TTL_SECS,
            )?),
            state_capacity,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }

    /// Scopes joined with single spaces, as the authorization endpoint expects.
    pub fn scope(&self) -> String {
        self.scopes.join(" ")
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn url_or<G>(get: &G, key: &'static str, default: &str) -> Result<Url, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let value = get(key).unwrap_or_else(|| default.to_string());
    match Url::parse(&value) {
        Ok(url) if url.cannot_be_a_base() => Err(ConfigError::Invalid {
            key,
            value,
            reason: "not a base URL".to_string(),
        }),
        Ok(url) => Ok(url),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
