// handlers/pages/dashboard.rs - GET/POST /dashboard/add-product handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::auth::Session;
use crate::database::ValidationErrors;
use crate::middleware::MaybeSession;
use crate::pages::{self, dashboard::ProductForm};
use crate::services::ProductError;
use crate::state::AppState;

pub const ADD_PRODUCT_PATH: &str = "/dashboard/add-product";

fn sign_in_redirect() -> Response {
    Redirect::to(&format!("/login?callbackUrl={}", ADD_PRODUCT_PATH)).into_response()
}

fn form_page(
    session: &Session,
    status: StatusCode,
    form: &ProductForm,
    errors: &ValidationErrors,
    failure: Option<&str>,
) -> Response {
    let html = pages::layout(
        "Add Product - ShopVault",
        Some(session),
        &pages::dashboard::render(form, errors, failure),
    );
    (status, Html(html)).into_response()
}

pub async fn add_product_page(MaybeSession(session): MaybeSession) -> Response {
    match session {
        Some(session) => form_page(
            &session,
            StatusCode::OK,
            &ProductForm::blank(),
            &ValidationErrors::new(),
            None,
        ),
        None => sign_in_redirect(),
    }
}

/// Creates through the same service path as `POST /api/products`
pub async fn add_product_submit(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Form(form): Form<ProductForm>,
) -> Response {
    let Some(session) = session else {
        return sign_in_redirect();
    };

    match state.products.create(&form.to_json()).await {
        Ok(product) => {
            tracing::info!("User {} created product {}", session.user.name, product.id);
            Redirect::to(&format!("/products/{}", product.id)).into_response()
        }
        Err(ProductError::Validation(errors)) => {
            tracing::warn!("Failed to create product: {}", errors);
            form_page(
                &session,
                StatusCode::BAD_REQUEST,
                &form,
                &errors,
                Some("Please fix the highlighted fields"),
            )
        }
        Err(e) => {
            tracing::error!("Failed to create product: {}", e);
            form_page(
                &session,
                StatusCode::INTERNAL_SERVER_ERROR,
                &form,
                &ValidationErrors::new(),
                Some("Failed to create product"),
            )
        }
    }
}
