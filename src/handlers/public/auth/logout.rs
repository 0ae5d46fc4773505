// handlers/public/auth/logout.rs - POST /api/auth/logout handler

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::middleware::MaybeSession;
use crate::state::AppState;

/// POST /api/auth/logout - clear the session cookie
///
/// Tokens are stateless, so a Bearer token stays valid until it expires.
pub async fn logout_post(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> impl IntoResponse {
    if let Some(session) = session {
        tracing::info!("User {} signed out", session.user.name);
    }
    (
        [(SET_COOKIE, state.sessions.sign_out_cookie())],
        Json(json!({ "message": "Signed out" })),
    )
}
