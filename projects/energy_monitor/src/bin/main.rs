use axum::serve;
use projects_energy_monitor::{
    config::{Config, ConfigError},
    router,
    state::{AppState, AppStateError},
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("AppState: {source}")]
    AppState {
        #[source]
        source: AppStateError,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    // a missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|source| MainError::Config { source })?;

    utils_trace::init(&config.log_level, config.log_format)
        .map_err(|source| MainError::TracingInit { source })?;

    let state = AppState::new(config.upstream.clone())
        .map_err(|source| MainError::AppState { source })?;
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!(
        addr = %config.addr,
        market_url = %config.upstream.market_url,
        rates_url = %config.upstream.rates_url,
        "Server running"
    );

    serve(listener, app)
        .await
        .map_err(|source| MainError::Serve { source })?;

    Ok(())
}
