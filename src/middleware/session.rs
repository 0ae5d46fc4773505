use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

use crate::auth::{AuthError, Session, SessionKeys, SessionUser};
use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "shopvault.session-token";

/// Resolves the caller's session from request credentials.
///
/// Holds no per-user state: a session is whatever valid token the request carries.
#[derive(Clone)]
pub struct SessionProvider {
    keys: SessionKeys,
    secure_cookie: bool,
}

impl SessionProvider {
    pub fn new(keys: SessionKeys, secure_cookie: bool) -> Self {
        Self {
            keys,
            secure_cookie,
        }
    }

    pub fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    /// `currentSession(request)`: session cookie first, then a Bearer token
    pub fn current_session(&self, headers: &HeaderMap) -> Option<Session> {
        let token = session_cookie(headers).or_else(|| bearer_token(headers))?;
        match self.keys.verify(&token) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::debug!("Ignoring session token: {}", e);
                None
            }
        }
    }

    /// Sign a token for `user`, returned with the matching `Set-Cookie` value
    pub fn sign_in(&self, user: &SessionUser) -> Result<(String, HeaderValue), AuthError> {
        let token = self.keys.issue(user)?;
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
            SESSION_COOKIE,
            token,
            self.keys.ttl().num_seconds(),
            if self.secure_cookie { "; Secure" } else { "" }
        );
        let header = HeaderValue::from_str(&cookie)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
        Ok((token, header))
    }

    pub fn sign_out_cookie(&self) -> HeaderValue {
        let cookie = format!(
            "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
            SESSION_COOKIE,
            if self.secure_cookie { "; Secure" } else { "" }
        );
        HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Authorization gate for mutating routes.
///
/// Refuses with 401 before the handler runs; on success the `Session` is
/// available to the handler as `Extension<Session>`.
pub async fn require_session(
    State(sessions): State<SessionProvider>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = sessions.current_session(request.headers()).ok_or_else(|| {
        tracing::info!(
            "Rejected unauthenticated {} {}",
            request.method(),
            request.uri().path()
        );
        ApiError::unauthorized("Unauthorized")
    })?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Session presence for pages that render differently when signed in
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
    SessionProvider: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = SessionProvider::from_ref(state);
        Ok(MaybeSession(sessions.current_session(&parts.headers)))
    }
}
