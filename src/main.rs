use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::{Request, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod browser;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod views;


fn main() {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_browser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration from .env / environment
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Listings API client + browser state
    let addr = config.bind_addr;
    let workers = config.max_workers;
    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("❌ Listings API client setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 4️⃣ Start the server
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req: Request, _info| {
        let path = req.uri().path().to_string();
        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%path, error = %err, "request failed");
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
