use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::{AuthError, Credentials, SessionKeys};
use crate::config::AppConfig;
use crate::database::SharedProductStore;
use crate::middleware::SessionProvider;
use crate::services::ProductService;

/// Everything a handler can reach; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub products: ProductService,
    pub sessions: SessionProvider,
    pub credentials: Credentials,
}

impl AppState {
    pub fn new(config: AppConfig, store: SharedProductStore) -> Result<Self, AuthError> {
        let keys = SessionKeys::from_config(&config.security)?;
        let sessions = SessionProvider::new(keys, config.security.cookie_secure);
        let credentials = Credentials::from_config(&config.security);

        Ok(Self {
            config: Arc::new(config),
            products: ProductService::new(store),
            sessions,
            credentials,
        })
    }

    pub fn strict_validation(&self) -> bool {
        self.config.api.strict_validation
    }
}

impl FromRef<AppState> for SessionProvider {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
