use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use app::AppState;
use config::AppConfig;
use dotenvy::dotenv;
use jobs::spawn_all_jobs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod app;
pub mod config;
pub mod constants;
pub mod database;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod swagger;
pub mod utils;

pub async fn start_web_server() -> anyhow::Result<()> {
    // import .env file
    dotenv().ok();
    initialize_logging();
    let config = AppConfig::from_env().map_err(|err| {
        tracing::error!("Unable to load configuration: {:?}", err);
        err
    })?;
    let state = AppState::from_config(&config).context("Unable to build app state")?;
    let state = Arc::new(state);
    if config.reminder_job_enabled {
        spawn_all_jobs(state.clone());
    }
    start_server(state, config.port).await
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("reminder_push_dispatcher=debug,tower_http=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

async fn start_server(state: Arc<AppState>, port: u16) -> anyhow::Result<()> {
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(state);
    tracing::debug!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
