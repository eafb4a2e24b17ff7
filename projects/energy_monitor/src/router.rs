use axum::{http::StatusCode, routing::get, Extension, Router};

use crate::{
    endpoints::{
        api::world_data::index::handler as api_world_data_handler,
        health::index::handler as health_handler,
        pages::{about::index::handler as about_handler, monitor::index::handler as monitor_handler},
    },
    state::SharedState,
};

pub fn build(state: SharedState) -> Router {
    Router::new()
        .route("/", get(monitor_handler))
        .route("/about", get(about_handler))
        .route("/api/world-data", get(api_world_data_handler))
        .route("/health", get(health_handler))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
        .layer(Extension(state))
}
