use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(register_products))
        .route("/products/diagnostics", get(product_diagnostics))
        .route("/products/:name/explosion", get(explode_product))
        .route("/products/:name/implosion", get(implode_product))
        .route("/components/:name/price", put(update_component_price))
}
