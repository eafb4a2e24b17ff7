use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    prices::{fetch_exchange_rate, fetch_gas_price, fetch_oil_price, fetch_stock_prices, StockPrice},
    reference::{fuel_prices, FuelPrice},
    state::{AppState, SharedState},
    templates::{TemplatesError, INDEX},
};

pub const UPDATE_TIME_FORMAT: &str = "%H:%M %d.%m.%Y";

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

/// Everything `index.html` displays.
#[derive(Debug, Serialize)]
pub struct MonitorPage {
    pub oil_price: String,
    pub gas_price: String,
    pub stocks: Vec<StockPrice>,
    pub fuel: &'static [FuelPrice],
    pub usd_rate: String,
    pub update_time: String,
}

pub fn format_update_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(UPDATE_TIME_FORMAT).to_string()
}

/// Fetches every live value in turn; upstream failures are already folded
/// into fallbacks by the fetchers.
pub async fn collect_page(state: &AppState) -> MonitorPage {
    let client = &state.client;
    let upstream = &state.upstream;

    let page = MonitorPage {
        oil_price: fetch_oil_price(client, upstream).await,
        gas_price: fetch_gas_price(client, upstream).await,
        stocks: fetch_stock_prices(client, upstream).await,
        fuel: fuel_prices(),
        usd_rate: fetch_exchange_rate(client, upstream).await,
        update_time: format_update_time(&Local::now()),
    };
    debug!(update_time = %page.update_time, "assembled monitor page");
    page
}

/// Axum handler: GET /
pub async fn handler(Extension(state): Extension<SharedState>) -> Result<Html<String>, HandlerError> {
    let page = collect_page(&state).await;

    let html = state
        .templates
        .render(INDEX, &page)
        .map_err(|source| HandlerError::RenderPage { source })?;

    Ok(Html(html))
}
