use std::time::Duration;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDateTime;
use projects_energy_monitor::{
    config::UpstreamConfig,
    endpoints::pages::monitor::index::UPDATE_TIME_FORMAT,
    prices::stocks::TRACKED_STOCKS,
    router,
    state::AppState,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn closed_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

fn upstream(market_url: String, rates_url: String) -> UpstreamConfig {
    UpstreamConfig {
        market_url,
        rates_url,
        market_timeout: Duration::from_secs(2),
        rates_timeout: Duration::from_secs(2),
        user_agent: "energy-monitor-tests".to_string(),
    }
}

async fn start_monitor(upstream: UpstreamConfig) -> anyhow::Result<String> {
    let state = AppState::new(upstream)?;
    serve(router::build(state)).await
}

/// Chart and rates stub that answers every symbol with a fixed close.
async fn start_healthy_upstream() -> anyhow::Result<String> {
    let app = Router::new()
        .route(
            "/v8/finance/chart/{symbol}",
            get(|Path(symbol): Path<String>| async move {
                let close = match symbol.as_str() {
                    "BZ=F" => 78.914,
                    "NG=F" => 2.1,
                    _ => 250.5,
                };
                Json(json!({
                    "chart": {
                        "result": [{
                            "timestamp": [1_706_947_200],
                            "indicators": { "quote": [{ "close": [close] }] }
                        }],
                        "error": null
                    }
                }))
            }),
        )
        .route(
            "/daily_json.js",
            get(|| async {
                r#"{"Date": "2024-02-03T11:30:00+03:00",
                    "Valute": {"USD": {"CharCode": "USD", "Nominal": 1, "Value": 90.6537}}}"#
            }),
        );
    serve(app).await
}

fn update_time(html: &str) -> Option<&str> {
    let start = html.find(r#"<span class="update-time">"#)? + r#"<span class="update-time">"#.len();
    let len = html[start..].find("</span>")?;
    Some(&html[start..start + len])
}

#[tokio::test]
async fn index_shows_live_values() -> anyhow::Result<()> {
    let market = start_healthy_upstream().await?;
    let monitor = start_monitor(upstream(market.clone(), format!("{market}/daily_json.js"))).await?;

    let response = reqwest::get(format!("{monitor}/")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await?;

    assert!(html.contains("78.91 USD"));
    assert!(html.contains("2.10 USD&#x2F;млн BTU"));
    assert!(html.contains("90.65 ₽"));
    assert_eq!(html.matches("250.50 RUB").count(), TRACKED_STOCKS.len());
    for (_, name) in TRACKED_STOCKS {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(html.contains("55.80 ₽"));
    Ok(())
}

#[tokio::test]
async fn index_renders_fallbacks_when_upstreams_are_down() -> anyhow::Result<()> {
    let dead = closed_url().await?;
    let monitor = start_monitor(upstream(dead.clone(), dead)).await?;

    let response = reqwest::get(format!("{monitor}/")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await?;

    assert!(html.contains("85.50 USD"));
    assert!(html.contains("3.85 USD&#x2F;млн BTU"));
    assert!(html.contains("92.50 ₽"));
    assert_eq!(html.matches("Н/Д").count() + html.matches("Н&#x2F;Д").count(), TRACKED_STOCKS.len());
    for (_, name) in TRACKED_STOCKS {
        assert!(html.contains(name), "missing {name}");
    }

    let stamp = update_time(&html).expect("update time span");
    assert!(!stamp.is_empty());
    NaiveDateTime::parse_from_str(stamp, UPDATE_TIME_FORMAT)?;
    assert_eq!(stamp.len(), "HH:MM DD.MM.YYYY".len());
    Ok(())
}

#[tokio::test]
async fn world_data_is_the_five_row_table() -> anyhow::Result<()> {
    let dead = closed_url().await?;
    let monitor = start_monitor(upstream(dead.clone(), dead)).await?;

    let response = reqwest::get(format!("{monitor}/api/world-data")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let rows: Vec<Value> = response.json().await?;

    assert_eq!(rows.len(), 5);
    for row in &rows {
        let object = row.as_object().expect("row is an object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["country", "gas_production", "oil_production", "reserves_oil"]);
    }
    assert_eq!(
        rows[1],
        json!({
            "country": "Россия",
            "oil_production": "10,6 млн барр./сут",
            "gas_production": "586 млрд м³",
            "reserves_oil": "80 млрд барр."
        })
    );

    let again: Vec<Value> = reqwest::get(format!("{monitor}/api/world-data")).await?.json().await?;
    assert_eq!(rows, again);
    Ok(())
}

#[tokio::test]
async fn about_page_lists_tables_and_timeline() -> anyhow::Result<()> {
    let dead = closed_url().await?;
    let monitor = start_monitor(upstream(dead.clone(), dead)).await?;

    let response = reqwest::get(format!("{monitor}/about")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await?;

    for country in ["США", "Россия", "Саудовская Аравия", "Канада", "Ирак"] {
        assert!(html.contains(country), "missing {country}");
    }
    assert!(html.contains("Добыча нефти"));
    assert!(html.contains("1846"));
    assert!(html.contains("2019"));
    Ok(())
}

#[tokio::test]
async fn health_and_unknown_paths() -> anyhow::Result<()> {
    let dead = closed_url().await?;
    let monitor = start_monitor(upstream(dead.clone(), dead)).await?;

    let health = reqwest::get(format!("{monitor}/health")).await?;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(health.text().await?, "ok");

    let missing = reqwest::get(format!("{monitor}/prices.php")).await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    Ok(())
}
