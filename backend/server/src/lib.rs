//! Documentation of the Sorcery Solutions spell proxy.
//!
//!
//!
//! # General Infrastructure
//! - User talks to the front end, same origin, on `RUST_PORT`
//! - Every `/api/*` route forwards its JSON payload to the spell backend at `API_BASE_URL`
//! - Backend status and body come back untouched
//! - Nothing is stored here, the backend is the service of record
//!
//!
//!
//! # Routes
//!
//! | Route | Backend | Failure body |
//! |-------|---------|--------------|
//! | `POST /api/spells` | `POST {base}/api/spells` | `{"error":"Failed to cast spell"}` |
//! | `GET /api/spells` | `GET {base}/api/spells` | `{"error":"Failed to fetch spells"}` |
//! | `POST /api/import_spellbook` | `POST {base}/api/import_spellbook` | `{"error":"Failed to upload YAML file"}` |
//!
//! Failures are always status 500: the request body was not JSON, or no JSON answer came back
//! from the backend.
//!
//!
//!
//! # Spellbook Import
//!
//! Body is `{ "yaml_content": "<raw yaml>" }`. Older clients send `{ "yaml": ... }`, which is
//! still accepted, but the backend always gets `yaml_content`.
//!
//! There is no body size limit, large spellbooks go through whole.
//!
//! The YAML is not checked here. The uploader runs [`spellbook::validate`] before sending
//! so users get a fast answer, and the backend does its own checking.
//!
//!
//!
//! # Setup
//!
//! Run against a local backend.
//! ```sh
//! API_BASE_URL=http://localhost:3000 RUST_LOG=info cargo run -p sorcery
//! ```
//!
//! Values can also live in a `.env` file next to the binary.
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{cast_handler, import_handler, list_handler};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/spells", post(cast_handler).get(list_handler))
        .route("/api/import_spellbook", post(import_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Starting server...");
    info!("Proxying to {}", config.api_base_url);

    let address = format!("0.0.0.0:{}", config.port);
    let state = State::new(config)?;

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
