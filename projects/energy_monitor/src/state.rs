use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;

use crate::{
    config::UpstreamConfig,
    templates::{Templates, TemplatesError},
};

/// Read-only state shared by every request.
pub struct AppState {
    pub client: Client,
    pub upstream: UpstreamConfig,
    pub templates: Templates,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Error)]
pub enum AppStateError {
    #[error("BuildHttpClient: {source}")]
    BuildHttpClient {
        source: reqwest::Error,
    },

    #[error(transparent)]
    Templates {
        #[from]
        source: TemplatesError,
    },
}

impl AppState {
    pub fn new(upstream: UpstreamConfig) -> Result<SharedState, AppStateError> {
        let client = Client::builder()
            .user_agent(upstream.user_agent.as_str())
            .timeout(upstream.market_timeout)
            .build()
            .map_err(|source| AppStateError::BuildHttpClient { source })?;

        Ok(Arc::new(AppState {
            client,
            upstream,
            templates: Templates::new()?,
        }))
    }
}
