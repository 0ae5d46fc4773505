// handlers/protected/products/product_post.rs - POST /api/products handler

use axum::{body::Bytes, extract::State, http::StatusCode, Extension, Json};

use crate::auth::Session;
use crate::database::Product;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/products - create a product, 201 with the stored record
pub async fn product_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state
        .products
        .create_from_bytes(&body)
        .await
        .map_err(|e| ApiError::from_product(e, "Failed to create product", state.strict_validation()))?;

    tracing::info!("User {} created product {}", session.user.name, product.id);
    Ok((StatusCode::CREATED, Json(product)))
}
