mod catalog;
mod config;
mod device;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::ReferenceData;
use crate::config::Config;
use crate::device::DeviceRequestStore;
use crate::matching::mentor::KeywordWeightMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Support Portal API v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference tables once; every matcher only ever borrows them.
    let reference = match &config.data_path {
        Some(path) => ReferenceData::from_json_file(path)?,
        None => ReferenceData::builtin(),
    };
    info!(
        "Reference data loaded: {} mentors, {} impulse categories, {} skills, {} index entries",
        reference.mentors.len(),
        reference.impulse_categories.len(),
        reference.skill_categories.iter_all().count(),
        reference.job_index.len()
    );

    // Initialize mentor matcher (KeywordWeightMatcher is the only backend today)
    let mentor_matcher = Arc::new(KeywordWeightMatcher);

    // In-memory store for simulated device provisioning requests
    let device_requests = DeviceRequestStore::new();

    // Build app state
    let state = AppState {
        reference: Arc::new(reference),
        mentor_matcher,
        device_requests,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
