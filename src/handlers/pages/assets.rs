// handlers/pages/assets.rs - bundled SVG images

use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};

const PLACEHOLDER_PRODUCT_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300"><rect width="400" height="300" fill="#e5e7eb"/><path d="M160 110h80a10 10 0 0 1 10 10v60a10 10 0 0 1-10 10h-80a10 10 0 0 1-10-10v-60a10 10 0 0 1 10-10z" fill="#9ca3af"/><circle cx="178" cy="132" r="9" fill="#e5e7eb"/><path d="M158 182l28-32 18 20 12-12 26 24z" fill="#e5e7eb"/></svg>"##;

const DEFAULT_AVATAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64"><circle cx="32" cy="32" r="32" fill="#d1d5db"/><circle cx="32" cy="25" r="11" fill="#f9fafb"/><path d="M12 54c4-10 12-15 20-15s16 5 20 15" fill="#f9fafb"/></svg>"##;

fn svg(body: &'static str) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (CACHE_CONTROL, "public, max-age=86400"),
        ],
        body,
    )
}

/// GET /placeholder-product.svg
pub async fn placeholder_product() -> impl IntoResponse {
    svg(PLACEHOLDER_PRODUCT_SVG)
}

/// GET /default-avatar.svg
pub async fn default_avatar() -> impl IntoResponse {
    svg(DEFAULT_AVATAR_SVG)
}
