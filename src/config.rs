// src/config.rs
//
// Runtime configuration
//
// Values come from the process environment (a `.env` file is loaded by the
// binary before this runs). Every field has a usable default except the API
// key, which the catalog service requires.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// What a repository does when the service answers with an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyBodyPolicy {
    /// End the sequence after Loading without a terminal value.
    #[default]
    EndSilently,
    /// Emit an Error carrying the remote-service message.
    EmitError,
}

impl EmptyBodyPolicy {
    fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "silent" | "end" => Ok(EmptyBodyPolicy::EndSilently),
            "error" => Ok(EmptyBodyPolicy::EmitError),
            other => Err(AppError::Config(format!(
                "CINEY_EMPTY_BODY must be 'silent' or 'error', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CineyConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    /// ISO 639-1 (optionally with region, e.g. "en-US")
    pub language: Option<String>,
    pub request_timeout: Duration,
    pub empty_body: EmptyBodyPolicy,
    /// Serve cached movie lists when the service is unreachable
    pub offline_fallback: bool,
    /// Local movie cache; `None` disables it
    pub database_path: Option<PathBuf>,
}

impl Default for CineyConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: String::new(),
            language: None,
            request_timeout: Duration::from_secs(30),
            empty_body: EmptyBodyPolicy::default(),
            offline_fallback: false,
            database_path: None,
        }
    }
}

impl CineyConfig {
    /// Load from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup("TMDB_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Config("TMDB_API_KEY is not set".to_string()))?;

        if let Some(url) = lookup("CINEY_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(url) = lookup("CINEY_IMAGE_BASE_URL") {
            config.image_base_url = url.trim_end_matches('/').to_string();
        }

        config.language = lookup("CINEY_LANGUAGE").filter(|l| !l.trim().is_empty());

        if let Some(raw) = lookup("CINEY_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "CINEY_REQUEST_TIMEOUT_SECS must be a whole number, got '{}'",
                    raw
                ))
            })?;
            if secs == 0 {
                return Err(AppError::Config(
                    "CINEY_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("CINEY_EMPTY_BODY") {
            config.empty_body = EmptyBodyPolicy::parse(&raw)?;
        }

        if let Some(raw) = lookup("CINEY_OFFLINE_FALLBACK") {
            config.offline_fallback = parse_flag("CINEY_OFFLINE_FALLBACK", &raw)?;
        }

        let cache_enabled = match lookup("CINEY_CACHE") {
            Some(raw) => parse_flag("CINEY_CACHE", &raw)?,
            None => false,
        };

        config.database_path = match lookup("CINEY_DATABASE_PATH") {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ if cache_enabled => Some(crate::db::get_database_path()?),
            _ => None,
        };

        if config.offline_fallback && config.database_path.is_none() {
            return Err(AppError::Config(
                "CINEY_OFFLINE_FALLBACK requires the movie cache (CINEY_CACHE or CINEY_DATABASE_PATH)"
                    .to_string(),
            ));
        }

        Ok(config)
    }
}

fn parse_flag(name: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
