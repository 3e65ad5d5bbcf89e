use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::{storage::json_list_store::JsonListStore, submissions::Submission};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    addr.parse().map_err(|source| StartupError::BindAddr { addr, source })
}

/// Open the data file and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    // Submission store (whole collection persisted as one JSON file)
    let store = JsonListStore::<Submission>::open(cfg.storage.data_file.clone()).await?;
    info!(data_file = %store.path().display(), "submission store ready");
    let state = ServerState::new(Arc::new(store));

    // Build router
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // Sanity check on the data file path before opening the store
    common::env::ensure_env(&cfg.storage.data_file).await?;
    let app = build_app(&cfg).await?;

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting form submissions server");
    println!("Server is running on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
