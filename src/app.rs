use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{pages, protected, public};
use crate::middleware::require_session;
use crate::state::AppState;

/// The full dispatch table: path + verb → handler
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.api.max_request_size_bytes;
    let request_logging = state.config.api.enable_request_logging;
    let cors = cors_layer(&state.config);

    let router = Router::new()
        // Public
        .route("/api", get(public::meta::api_index))
        .route("/health", get(public::meta::health))
        .merge(auth_routes())
        // Reads are public, mutations pass the session gate first
        .merge(product_routes(&state))
        // Server-rendered pages
        .merge(page_routes())
        .layer(DefaultBodyLimit::max(body_limit));

    let router = if request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };
    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/api/auth/login", post(auth::login_post))
        .route("/api/auth/session", get(auth::session_get))
        .route("/api/auth/logout", post(auth::logout_post))
}

fn product_routes(state: &AppState) -> Router<AppState> {
    let gate = from_fn_with_state(state.sessions.clone(), require_session);

    Router::new()
        .route(
            "/api/products",
            get(public::products::products_get)
                .merge(post(protected::products::product_post).route_layer(gate.clone())),
        )
        .route(
            "/api/products/:id",
            get(public::products::product_get).merge(
                put(protected::products::product_put)
                    .merge(delete(protected::products::product_delete))
                    .route_layer(gate),
            ),
        )
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home::home_page))
        .route("/products", get(pages::products::products_page))
        .route("/products/:id", get(pages::products::product_page))
        .route(
            "/login",
            get(pages::login::login_page).post(pages::login::login_submit),
        )
        .route("/logout", post(pages::login::logout_submit))
        .route(
            pages::dashboard::ADD_PRODUCT_PATH,
            get(pages::dashboard::add_product_page).post(pages::dashboard::add_product_submit),
        )
        .route("/placeholder-product.svg", get(pages::assets::placeholder_product))
        .route("/default-avatar.svg", get(pages::assets::default_avatar))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }
    if config.environment == Environment::Development && config.security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
            ])
            .allow_credentials(true),
    )
}
