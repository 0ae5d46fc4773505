use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SecurityConfig;

/// The signed-in user as exposed to handlers and pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub image: Option<String>,
}

/// Proof of an authenticated identity attached to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &SessionUser, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user.name.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn into_session(self) -> Option<Session> {
        let expires = Utc.timestamp_opt(self.exp, 0).single()?;
        Some(Session {
            user: SessionUser {
                name: self.name,
                image: self.image,
            },
            expires,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Session token generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid session token: {0}")]
    InvalidToken(String),
    #[error("Session secret not configured")]
    InvalidSecret,
}

/// HS256 signing keys for session tokens
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, AuthError> {
        // Capped at a year
        let hours = i64::try_from(security.session_ttl_hours.min(24 * 365)).unwrap_or(24);
        Self::new(&security.session_secret, Duration::hours(hours))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user: &SessionUser) -> Result<String, AuthError> {
        self.encode_claims(&Claims::new(user, self.ttl))
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| AuthError::TokenGeneration(e.to_string()))
    }

    /// Signature and expiry are both checked
    pub fn verify(&self, token: &str) -> Result<Session, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        data.claims
            .into_session()
            .ok_or_else(|| AuthError::InvalidToken("expiry out of range".to_string()))
    }
}

/// Configured sign-in identity
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password_digest: [u8; 32],
    image: Option<String>,
    enabled: bool,
}

impl Credentials {
    pub fn new(username: &str, password: &str, image: Option<String>) -> Self {
        Self {
            username: username.to_string(),
            password_digest: digest(password),
            image,
            enabled: !username.is_empty() && !password.is_empty(),
        }
    }

    pub fn from_config(security: &SecurityConfig) -> Self {
        Self::new(
            &security.admin_username,
            &security.admin_password,
            security.admin_image.clone(),
        )
    }

    /// Digests are compared so the check does not short-circuit on password length
    pub fn verify(&self, username: &str, password: &str) -> Option<SessionUser> {
        if !self.enabled {
            return None;
        }
        let password_ok = digest(password) == self.password_digest;
        if username == self.username && password_ok {
            Some(SessionUser {
                name: self.username.clone(),
                image: self.image.clone(),
            })
        } else {
            None
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
