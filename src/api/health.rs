use axum::extract::State;
use axum::Json;

use crate::api::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the process is serving; reports how many records are loaded.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let records = state.session.read().await.dataset().len();
    Json(serde_json::json!({"status": "ready", "records": records}))
}
