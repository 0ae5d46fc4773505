// handlers/public/products/products_get.rs - GET /api/products handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::database::{Product, ProductFilter};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/products - list products, newest first
///
/// Optional query parameters: `category=<Category>` and `inStock=<bool>`.
/// An unparseable filter is a 400 with the usual JSON error body.
pub async fn products_get(
    State(state): State<AppState>,
    query: Result<Query<ProductFilter>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(filter) = query
        .map_err(|rejection| ApiError::bad_request(format!("Invalid query: {}", rejection.body_text())))?;

    let products = state
        .products
        .list(&filter)
        .await
        .map_err(|e| ApiError::from_product(e, "Failed to fetch products", state.strict_validation()))?;

    tracing::debug!("Listed {} products", products.len());
    Ok(Json(products))
}
