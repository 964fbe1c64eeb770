use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::products::MessageResponse;
use crate::middleware::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub new_price: f64,
}

/// Set the unit cost of every item with this name (case-insensitive)
///
/// PUT /components/:name/price?new_price=P
pub async fn update_component_price(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.metrics.record("price_update");
    state.formulas.update_price(&name, query.new_price)?;
    Ok(Json(MessageResponse {
        msg: format!("Price of {} updated to {:.2}", name, query.new_price),
    }))
}
