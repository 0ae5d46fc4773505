// handlers/protected/products/product_put.rs - PUT /api/products/:id handler

use axum::{
    body::Bytes,
    extract::{Path, State},
    Extension, Json,
};

use crate::auth::Session;
use crate::database::Product;
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /api/products/:id - partial update
///
/// Only the fields present in the body change; `updatedAt` is refreshed and
/// `_id`/`createdAt` are never writable.
pub async fn product_put(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .update_from_bytes(&id, &body)
        .await
        .map_err(|e| ApiError::from_product(e, "Failed to update product", state.strict_validation()))?;

    tracing::info!("User {} updated product {}", session.user.name, product.id);
    Ok(Json(product))
}
