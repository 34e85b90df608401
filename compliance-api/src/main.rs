use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{app_state::AppState, config::read_config};

mod app_state;
mod config;
mod router;
mod routes;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to read configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("invalid listen address '{0}'")]
    Address(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::from_filename("./compliance-api/.env.local").ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "compliance_api=debug,rest_compliance=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = read_config()?;
    let app_state = AppState::new(&settings.compliance);
    tracing::info!(
        rest_policy = ?app_state.rest_policy,
        lookback_years = app_state.lookback_years,
        "loaded compliance settings"
    );

    let raw_addr = format!("{}:{}", settings.application.host, settings.application.port);
    let addr: SocketAddr = raw_addr
        .parse()
        .map_err(|_| StartupError::Address(raw_addr.clone()))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!("listening on {}", addr);

    let app = router::create(app_state);
    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
