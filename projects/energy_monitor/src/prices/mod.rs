//! Live quotes. Every fetcher makes a single upstream attempt and
//! substitutes a fixed fallback literal on any failure, so callers always
//! get a displayable string.

pub mod commodities;
pub mod exchange_rate;
pub mod stocks;

use interfaces_market_yahoo_chart::index::fetch_latest_close;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;

pub use commodities::{fetch_gas_price, fetch_oil_price};
pub use exchange_rate::fetch_exchange_rate;
pub use stocks::{fetch_stock_prices, StockPrice};

/// Two decimals, one space, unit: `85.5, "USD"` → `"85.50 USD"`.
pub fn format_quote(value: f64, unit: &str) -> String {
    format!("{value:.2} {unit}")
}

/// Latest close of `symbol` formatted with `unit`, or `fallback`.
pub(crate) async fn quote_or_fallback(
    client: &Client,
    upstream: &UpstreamConfig,
    symbol: &str,
    unit: &str,
    fallback: &str,
) -> String {
    match fetch_latest_close(client, &upstream.market_url, symbol).await {
        Ok(close) => {
            debug!(symbol, close, "fetched latest close");
            format_quote(close, unit)
        }
        Err(err) => {
            warn!(symbol, error = %err, fallback, "market data unavailable, using fallback");
            fallback.to_string()
        }
    }
}
