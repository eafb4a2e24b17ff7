use axum::{
    http::StatusCode,
    extract::Extension,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    reference::{industry_stats, timeline, world_comparison, IndustryStat, TimelineEntry, WorldRow},
    state::SharedState,
    templates::{TemplatesError, ABOUT},
};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("RenderPage: {source}")]
    RenderPage {
        #[from]
        source: TemplatesError,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::RenderPage { source } => {
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub stats: &'static [IndustryStat],
    pub world: &'static [WorldRow],
    pub timeline: &'static [TimelineEntry],
}

/// Axum handler: GET /about
pub async fn handler(Extension(state): Extension<SharedState>) -> Result<Html<String>, HandlerError> {
    let page = AboutPage {
        stats: industry_stats(),
        world: world_comparison(),
        timeline: timeline(),
    };

    let html = state
        .templates
        .render(ABOUT, &page)
        .map_err(|source| HandlerError::RenderPage { source })?;

    Ok(Html(html))
}
