use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Top-level body of `/v8/finance/chart/{symbol}`.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteIndicator {
    // the provider emits `null` for bars without trades
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Last non-null, finite close of the first result series.
    pub fn latest_close(&self) -> Option<f64> {
        self.chart
            .result
            .as_ref()?
            .first()?
            .indicators
            .quote
            .first()?
            .close
            .iter()
            .rev()
            .find_map(|&close| close.filter(|value| value.is_finite()))
    }
}

#[derive(Debug, Error)]
pub enum FetchLatestCloseError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("ResponseDecode: {source}")]
    ResponseDecode {
        source: reqwest::Error,
    },

    #[error("Provider: {code}: {description}")]
    Provider {
        code: String,
        description: String,
    },

    #[error("NoClose: no closing price for {symbol}")]
    NoClose {
        symbol: String,
    },
}

/// Latest daily close for `symbol`, one request, no retries.
pub async fn fetch_latest_close(
    client: &Client,
    base_url: &str,
    symbol: &str,
) -> Result<f64, FetchLatestCloseError> {
    let url = format!("{}/v8/finance/chart/{symbol}", base_url.trim_end_matches('/'));

    let response = client
        .get(url)
        .query(&[("range", "1d"), ("interval", "1d")])
        .send()
        .await
        .map_err(|source| FetchLatestCloseError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchLatestCloseError::UnexpectedStatus { status });
    }

    let mut envelope: ChartEnvelope = response
        .json()
        .await
        .map_err(|source| FetchLatestCloseError::ResponseDecode { source })?;

    if let Some(ChartError { code, description }) = envelope.chart.error.take() {
        return Err(FetchLatestCloseError::Provider { code, description });
    }

    envelope
        .latest_close()
        .ok_or_else(|| FetchLatestCloseError::NoClose { symbol: symbol.to_string() })
}
