use reqwest::Client;
use serde::Serialize;

use super::quote_or_fallback;
use crate::config::UpstreamConfig;

/// Sentinel shown when a stock quote cannot be fetched.
pub const STOCK_FALLBACK: &str = "Н/Д";

/// Moscow Exchange tickers and their display names, in display order.
pub const TRACKED_STOCKS: [(&str, &str); 5] = [
    ("ROSN.ME", "Роснефть"),
    ("LKOH.ME", "Лукойл"),
    ("GAZP.ME", "Газпром"),
    ("NVTK.ME", "Новатэк"),
    ("SNGS.ME", "Сургутнефтегаз"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPrice {
    pub name: &'static str,
    pub price: String,
}

/// One entry per tracked company, fetched one after another. A failed
/// fetch only affects its own entry.
pub async fn fetch_stock_prices(client: &Client, upstream: &UpstreamConfig) -> Vec<StockPrice> {
    let mut board = Vec::with_capacity(TRACKED_STOCKS.len());

    for (ticker, name) in TRACKED_STOCKS {
        let price = quote_or_fallback(client, upstream, ticker, "RUB", STOCK_FALLBACK).await;
        board.push(StockPrice { name, price });
    }

    board
}
