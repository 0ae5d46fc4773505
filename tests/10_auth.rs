mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<()> {
    let server = common::ensure_server().await?;
    let res = reqwest::Client::new()
        .post(server.url("/api/auth/login"))
        .json(&json!({ "username": common::ADMIN_USER, "password": "wrong" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get(header::SET_COOKIE).is_none());
    Ok(())
}

#[tokio::test]
async fn login_rejects_malformed_body() -> Result<()> {
    let server = common::ensure_server().await?;
    let res = reqwest::Client::new()
        .post(server.url("/api/auth/login"))
        .header(header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn cookie_session_lifecycle() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::builder().cookie_store(true).build()?;

    let anonymous: Value = client
        .get(server.url("/api/auth/session"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(anonymous, json!({}));

    let res = client
        .post(server.url("/api/auth/login"))
        .json(&json!({ "username": common::ADMIN_USER, "password": common::ADMIN_PASSWORD }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("shopvault.session-token="), "cookie: {}", cookie);
    assert!(cookie.contains("HttpOnly"));

    let session: Value = client
        .get(server.url("/api/auth/session"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(session["user"]["name"], common::ADMIN_USER);
    assert!(session["expires"].is_string());

    // Cookie alone authorizes mutations
    let res = client
        .post(server.url("/api/products"))
        .json(&common::sample_product("Cookie Authored"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.post(server.url("/api/auth/logout")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let after: Value = client
        .get(server.url("/api/auth/session"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(after, json!({}));
    Ok(())
}

#[tokio::test]
async fn mutations_without_session_are_refused() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::login_token(server).await?;
    let id = common::create_product(server, &token, &common::sample_product("Guarded")).await?;
    let client = reqwest::Client::new();
    let before: Value = client
        .get(server.url(&format!("/api/products/{}", id)))
        .send()
        .await?
        .json()
        .await?;

    let res = client
        .post(server.url("/api/products"))
        .json(&common::sample_product("Sneaky"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Unauthorized");

    let res = client
        .put(server.url(&format!("/api/products/{}", id)))
        .json(&json!({ "price": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .delete(server.url(&format!("/api/products/{}", id)))
        .bearer_auth("not-a-valid-token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let after: Value = client
        .get(server.url(&format!("/api/products/{}", id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(before, after, "storage changed by refused requests");

    let listing: Vec<Value> = client
        .get(server.url("/api/products"))
        .send()
        .await?
        .json()
        .await?;
    assert!(listing.iter().all(|p| p["name"] != "Sneaky"));
    Ok(())
}
