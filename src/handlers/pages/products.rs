// handlers/pages/products.rs - GET /products and GET /products/:id handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Html,
};

use crate::database::ProductFilter;
use crate::middleware::MaybeSession;
use crate::pages;
use crate::services::ProductError;
use crate::state::AppState;

pub async fn products_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    query: Result<Query<ProductFilter>, QueryRejection>,
) -> (StatusCode, Html<String>) {
    let filter = match query {
        Ok(Query(filter)) => filter,
        Err(rejection) => {
            tracing::debug!("Rejected product filter: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::layout(
                    "Products - ShopVault",
                    session.as_ref(),
                    &pages::not_found_block("Something went wrong", "Invalid product filter"),
                )),
            );
        }
    };

    match state.products.list(&filter).await {
        Ok(products) => (
            StatusCode::OK,
            Html(pages::layout(
                "Products - ShopVault",
                session.as_ref(),
                &pages::products::listing(&products, &filter),
            )),
        ),
        Err(e) => {
            tracing::error!("Failed to fetch products: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::layout(
                    "Products - ShopVault",
                    session.as_ref(),
                    &pages::not_found_block("Something went wrong", "Failed to fetch products"),
                )),
            )
        }
    }
}

/// Rendered on the server from the same lookup the JSON API uses
pub async fn product_page(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let (status, title, content) = match state.products.get(&id).await {
        Ok(product) => (
            StatusCode::OK,
            format!("{} - ShopVault", product.name),
            pages::products::detail(&product),
        ),
        Err(ProductError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            "Product Not Found - ShopVault".to_string(),
            pages::products::detail_not_found(),
        ),
        Err(e) => {
            tracing::error!("Failed to fetch product {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Product Not Found - ShopVault".to_string(),
                pages::products::detail_error(),
            )
        }
    };

    (status, Html(pages::layout(&title, session.as_ref(), &content)))
}
