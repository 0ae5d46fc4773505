// handlers/public/meta.rs - GET /api and GET /health handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api - endpoint index
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "name": "ShopVault API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products (GET public, POST session)",
            "product": "/api/products/:id (GET public, PUT/DELETE session)",
            "auth": "/api/auth/login, /api/auth/session, /api/auth/logout",
            "health": "/health",
        }
    }))
}

/// GET /health - 503 when the product store cannot be reached
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let backend = state.products.store().backend();

    match state.products.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": backend,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "store": backend,
                    "error": "store unavailable",
                })),
            )
        }
    }
}
