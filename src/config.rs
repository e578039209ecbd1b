// config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Listings requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Distance slider ceiling in km. A value at the ceiling means "no constraint".
pub const MAX_DISTANCE_KM: f64 = 40.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the external listings API; `/api/listings` is appended.
    pub api_base_url: String,
    /// Base URL of the marketplace; item links are `{marketplace_url}/item/{slug}`.
    pub marketplace_url: String,
    pub static_dir: PathBuf,
    pub http_timeout: Duration,
    pub max_workers: usize,
    /// Browser sessions kept at once; the least recently used is dropped beyond this.
    pub max_sessions: usize,
    /// A session untouched for this long starts over with a fresh state.
    pub session_idle: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base_url: "http://127.0.0.1:8000".to_string(),
            marketplace_url: "https://es.wallapop.com".to_string(),
            static_dir: PathBuf::from("static"),
            http_timeout: Duration::from_secs(30),
            max_workers: 8,
            max_sessions: 1000,
            session_idle: Duration::from_secs(60 * 60),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment on top of the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("BIND_ADDR") {
            cfg.bind_addr = parse("BIND_ADDR", v)?;
        }
        if let Some(v) = lookup("LISTINGS_API_URL") {
            cfg.api_base_url = parse_url("LISTINGS_API_URL", v)?;
        }
        if let Some(v) = lookup("MARKETPLACE_URL") {
            cfg.marketplace_url = parse_url("MARKETPLACE_URL", v)?;
        }
        if let Some(v) = lookup("STATIC_DIR") {
            cfg.static_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HTTP_TIMEOUT_SECS") {
            cfg.http_timeout = Duration::from_secs(parse("HTTP_TIMEOUT_SECS", v)?);
        }
        if let Some(v) = lookup("MAX_WORKERS") {
            cfg.max_workers = parse_positive("MAX_WORKERS", v)?;
        }
        if let Some(v) = lookup("MAX_SESSIONS") {
            cfg.max_sessions = parse_positive("MAX_SESSIONS", v)?;
        }
        if let Some(v) = lookup("SESSION_IDLE_SECS") {
            cfg.session_idle = Duration::from_secs(parse("SESSION_IDLE_SECS", v)?);
        }

        Ok(cfg)
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_positive(key: &'static str, value: String) -> Result<usize, ConfigError> {
    match parse(key, value.clone())? {
        0 => Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be at least 1".into(),
        }),
        n => Ok(n),
    }
}

// Trailing slashes are dropped so paths can be appended with a single '/'.
fn parse_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    match url::Url::parse(value.trim()) {
        Ok(_) => Ok(value.trim().trim_end_matches('/').to_string()),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
