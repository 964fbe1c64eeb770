//! Product Handlers
//!
//! Item list registration plus explosion and implosion of a product.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use formula_models::{ExplosionNode, ImplosionSummary, ItemRecord};
use serde::{Deserialize, Serialize};

use crate::middleware::ApiError;
use crate::service::FormulaDiagnostics;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Replace the stored item list
///
/// POST /products
pub async fn register_products(
    State(state): State<AppState>,
    Json(items): Json<Vec<ItemRecord>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let count = state.formulas.register_items(&items)?;
    Ok(Json(MessageResponse {
        msg: format!("{} items registered successfully", count),
    }))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemRecord>>, ApiError> {
    Ok(Json(state.formulas.list_items()?))
}

/// GET /products/diagnostics
pub async fn product_diagnostics(
    State(state): State<AppState>,
) -> Result<Json<FormulaDiagnostics>, ApiError> {
    Ok(Json(state.formulas.diagnostics()?))
}

/// Nested cost breakdown of a product
///
/// GET /products/:name/explosion
pub async fn explode_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ExplosionNode>, ApiError> {
    state.metrics.record("explosion");
    Ok(Json(state.formulas.explosion(&name)?))
}

#[derive(Debug, Deserialize)]
pub struct ImplosionQuery {
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Component requirements for a production run
///
/// GET /products/:name/implosion?quantity=N
pub async fn implode_product(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ImplosionQuery>,
) -> Result<Json<ImplosionSummary>, ApiError> {
    state.metrics.record("implosion");
    Ok(Json(state.formulas.implosion(&name, query.quantity)?))
}
