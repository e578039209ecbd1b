// app.rs
use crate::api::{HttpListingsApi, ListingsApi};
use crate::browser::Sessions;
use crate::config::AppConfig;
use crate::errors::ServerError;

const HTMX_CDN: &str = "https://unpkg.com/htmx.org@1.9.12";
const HTMX_FILE: &str = "htmx.js";

/// Shared handle passed to every request: config, the listings API and per-session browser state.
pub struct App {
    pub config: AppConfig,
    pub api: Box<dyn ListingsApi>,
    pub sessions: Sessions,
    /// Where the layout loads htmx from: the static dir when the script is there.
    pub htmx_src: String,
}

impl App {
    pub fn new(config: AppConfig, api: Box<dyn ListingsApi>) -> Self {
        let htmx_src = if config.static_dir.join(HTMX_FILE).is_file() {
            format!("/static/{HTMX_FILE}")
        } else {
            tracing::warn!(
                static_dir = %config.static_dir.display(),
                "no local {HTMX_FILE}, loading htmx from {HTMX_CDN}"
            );
            HTMX_CDN.to_string()
        };

        Self {
            sessions: Sessions::new(config.max_sessions, config.session_idle),
            config,
            api,
            htmx_src,
        }
    }

    /// App backed by the HTTP listings client configured in `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, ServerError> {
        let api = HttpListingsApi::new(&config.api_base_url, config.http_timeout)?;
        tracing::info!(endpoint = %api.endpoint(), "listings API configured");
        Ok(Self::new(config, Box::new(api)))
    }
}
