use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn home() -> Json<Value> {
    Json(json!({ "msg": "Formula API running" }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "formula-api-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> String {
    state
        .metrics
        .render()
        .unwrap_or_else(|_| "Error encoding metrics".to_string())
}
