use std::{collections::HashMap, time::Duration};

use chrono::{DateTime, FixedOffset};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Daily official rates as published by the CBR mirror feed.
///
/// Only the fields that are read are typed; everything else stays raw so an
/// odd entry elsewhere in the document does not spoil the whole feed.
#[derive(Debug, Deserialize)]
pub struct DailyRates {
    #[serde(rename = "Date", default)]
    pub date: Value,
    #[serde(rename = "Valute", default)]
    pub valute: HashMap<String, Value>,
}

impl DailyRates {
    /// Rubles per `Nominal` units of `char_code`, as quoted.
    pub fn value(&self, char_code: &str) -> Option<f64> {
        self.valute.get(char_code)?.get("Value")?.as_f64()
    }

    /// Publication time, when present and RFC 3339.
    pub fn published(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date.as_str()?).ok()
    }
}

#[derive(Debug, Error)]
pub enum FetchDailyRatesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("Deserialize: {source}")]
    Deserialize {
        #[from]
        source: serde_json::Error,
    },
}

/// Fetches the daily rates document. The feed is served as
/// `application/javascript`, so the body is read as text and parsed here.
pub async fn fetch_daily_rates(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<DailyRates, FetchDailyRatesError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| FetchDailyRatesError::RequestSend { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchDailyRatesError::UnexpectedStatus { status });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchDailyRatesError::ResponseRead { source })?;

    Ok(serde_json::from_str(&body)?)
}
