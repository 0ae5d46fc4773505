// handlers/public/auth/login.rs - POST /api/auth/login handler

use axum::{
    body::Bytes,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/**
 * POST /api/auth/login - Exchange credentials for a session
 *
 * Input: `{"username": "...", "password": "..."}`
 *
 * Output: `{"token": "...", "user": {"name", "image"}, "expires": "..."}` with
 * the session cookie set. The token also works as a Bearer credential.
 */
pub async fn login_post(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: LoginRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::invalid_json(format!("Invalid login request: {}", e)))?;

    let user = state
        .credentials
        .verify(&request.username, &request.password)
        .ok_or_else(|| {
            tracing::warn!("Failed sign-in attempt for {}", request.username);
            ApiError::unauthorized("Invalid username or password")
        })?;

    let (token, cookie) = state.sessions.sign_in(&user).map_err(|e| {
        tracing::error!("Failed to issue session: {}", e);
        ApiError::internal_server_error("Failed to sign in")
    })?;

    let session = Session {
        user,
        expires: chrono::Utc::now() + state.sessions.keys().ttl(),
    };
    tracing::info!("User {} signed in", session.user.name);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(json!({
            "token": token,
            "user": session.user,
            "expires": session.expires,
        })),
    )
        .into_response())
}
