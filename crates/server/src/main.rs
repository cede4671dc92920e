use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use server_api::ApiContext;
use storage::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let storage = match &settings.catalog_path {
        Some(path) => Storage::from_catalog_file(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => Storage::with_seed_catalog(),
    };

    let state = AppState {
        api: ApiContext { storage },
    };
    let app = api::build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "roster server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
