use reqwest::Client;

use super::quote_or_fallback;
use crate::config::UpstreamConfig;

/// Brent crude futures.
pub const OIL_SYMBOL: &str = "BZ=F";
/// Henry Hub natural gas futures.
pub const GAS_SYMBOL: &str = "NG=F";

pub const OIL_FALLBACK: &str = "85.50 USD";
pub const GAS_FALLBACK: &str = "3.85 USD/млн BTU";

pub async fn fetch_oil_price(client: &Client, upstream: &UpstreamConfig) -> String {
    quote_or_fallback(client, upstream, OIL_SYMBOL, "USD", OIL_FALLBACK).await
}

pub async fn fetch_gas_price(client: &Client, upstream: &UpstreamConfig) -> String {
    quote_or_fallback(client, upstream, GAS_SYMBOL, "USD/млн BTU", GAS_FALLBACK).await
}
