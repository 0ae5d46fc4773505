// handlers/protected/products/product_delete.rs - DELETE /api/products/:id handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /api/products/:id - remove a product
pub async fn product_delete(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let product = state
        .products
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_product(e, "Failed to delete product", state.strict_validation()))?;

    tracing::info!("User {} deleted product {}", session.user.name, product.id);
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
