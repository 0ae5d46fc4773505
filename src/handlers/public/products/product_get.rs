// handlers/public/products/product_get.rs - GET /api/products/:id handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::Product;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/products/:id - fetch one product
///
/// 404 `{"error":"Product not found"}` when no record has the id, including
/// ids that are not valid identifiers at all.
pub async fn product_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get(&id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_product(e, "Failed to fetch product", state.strict_validation()))
}
