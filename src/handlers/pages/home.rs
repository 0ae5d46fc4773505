// handlers/pages/home.rs - GET / handler

use axum::response::Html;

use crate::middleware::MaybeSession;
use crate::pages;

pub async fn home_page(MaybeSession(session): MaybeSession) -> Html<String> {
    Html(pages::layout(
        "ShopVault - Your Trusted Online Store",
        session.as_ref(),
        &pages::home::render(),
    ))
}
