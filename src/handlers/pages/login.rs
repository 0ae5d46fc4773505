// handlers/pages/login.rs - GET/POST /login and POST /logout handlers

use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use super::local_redirect_target;
use crate::middleware::MaybeSession;
use crate::pages;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginQuery {
    pub callback_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub callback_url: Option<String>,
}

pub async fn login_page(
    MaybeSession(session): MaybeSession,
    Query(query): Query<LoginQuery>,
) -> Response {
    let target = local_redirect_target(query.callback_url.as_deref());
    if session.is_some() {
        return Redirect::to(target).into_response();
    }
    Html(pages::layout(
        "Sign In - ShopVault",
        None,
        &pages::login::render(target, "", None),
    ))
    .into_response()
}

pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let target = local_redirect_target(form.callback_url.as_deref()).to_string();

    let Some(user) = state.credentials.verify(&form.username, &form.password) else {
        tracing::warn!("Failed sign-in attempt for {}", form.username);
        let html = pages::layout(
            "Sign In - ShopVault",
            None,
            &pages::login::render(&target, &form.username, Some("Invalid username or password")),
        );
        return (StatusCode::UNAUTHORIZED, Html(html)).into_response();
    };

    match state.sessions.sign_in(&user) {
        Ok((_, cookie)) => {
            tracing::info!("User {} signed in", user.name);
            ([(SET_COOKIE, cookie)], Redirect::to(&target)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to issue session: {}", e);
            let html = pages::layout(
                "Sign In - ShopVault",
                None,
                &pages::login::render(&target, &form.username, Some("Sign-in failed, please try again")),
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
        }
    }
}

pub async fn logout_submit(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> impl IntoResponse {
    if let Some(session) = session {
        tracing::info!("User {} signed out", session.user.name);
    }
    ([(SET_COOKIE, state.sessions.sign_out_cookie())], Redirect::to("/"))
}
