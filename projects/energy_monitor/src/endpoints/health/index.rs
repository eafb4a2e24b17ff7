/// Axum handler: GET /health
pub async fn handler() -> &'static str {
    "ok"
}
