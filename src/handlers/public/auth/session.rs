// handlers/public/auth/session.rs - GET /api/auth/session handler

use axum::Json;
use serde_json::{json, Value};

use crate::middleware::MaybeSession;

/// GET /api/auth/session - the caller's session, or `{}` when signed out
pub async fn session_get(MaybeSession(session): MaybeSession) -> Json<Value> {
    match session {
        Some(session) => Json(json!(session)),
        None => Json(json!({})),
    }
}
