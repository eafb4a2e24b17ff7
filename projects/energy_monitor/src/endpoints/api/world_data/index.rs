use axum::Json;

use crate::reference::{world_comparison, WorldRow};

/// Axum handler: GET /api/world-data
pub async fn handler() -> Json<&'static [WorldRow]> {
    Json(world_comparison())
}
