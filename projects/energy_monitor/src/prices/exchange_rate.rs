use interfaces_market_cbr_rates::index::{fetch_daily_rates, FetchDailyRatesError};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;

pub const USD_RATE_FALLBACK: &str = "92.50 ₽";

#[derive(Debug, Error)]
pub enum FetchUsdRateError {
    #[error("FetchDailyRates: {source}")]
    FetchDailyRates {
        #[from]
        source: FetchDailyRatesError,
    },

    #[error("CurrencyMissing: {code}")]
    CurrencyMissing {
        code: &'static str,
    },
}

async fn fetch_usd_rate(client: &Client, upstream: &UpstreamConfig) -> Result<f64, FetchUsdRateError> {
    let rates = fetch_daily_rates(client, &upstream.rates_url, upstream.rates_timeout).await?;

    rates
        .value("USD")
        .ok_or(FetchUsdRateError::CurrencyMissing { code: "USD" })
}

/// Official USD/RUB rate as `"{rate:.2} ₽"`, or the fallback.
pub async fn fetch_exchange_rate(client: &Client, upstream: &UpstreamConfig) -> String {
    match fetch_usd_rate(client, upstream).await {
        Ok(rate) => {
            debug!(rate, "fetched USD/RUB rate");
            format!("{rate:.2} ₽")
        }
        Err(err) => {
            warn!(error = %err, fallback = USD_RATE_FALLBACK, "exchange rate unavailable, using fallback");
            USD_RATE_FALLBACK.to_string()
        }
    }
}
