mod common;

use std::time::Duration;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn strict_mode_reports_field_errors() -> Result<()> {
    let server = common::TestServer::spawn(&[("API_STRICT_VALIDATION", "true")])?;
    server.wait_ready(Duration::from_secs(10)).await?;
    let token = common::login_token(&server).await?;
    let client = reqwest::Client::new();

    let mut body = common::sample_product("Strict");
    body["category"] = json!("Toys");
    body["price"] = json!(-3);
    let res = client
        .post(server.url("/api/products"))
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let error: Value = res.json().await?;
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["field_errors"]["category"].is_string());
    assert!(error["field_errors"]["price"].is_string());
    assert!(error["field_errors"].get("name").is_none());

    let res = client
        .post(server.url("/api/products"))
        .bearer_auth(&token)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"name\":")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = res.json().await?;
    assert_eq!(error["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn empty_required_strings_fail_on_create_and_update() -> Result<()> {
    let server = common::TestServer::spawn(&[("API_STRICT_VALIDATION", "true")])?;
    server.wait_ready(Duration::from_secs(10)).await?;
    let token = common::login_token(&server).await?;
    let client = reqwest::Client::new();

    let mut body = common::sample_product("Blank");
    body["description"] = json!("");
    body["image"] = json!("");
    let res = client
        .post(server.url("/api/products"))
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error: Value = res.json().await?;
    assert_eq!(error["field_errors"]["description"], "Path `description` is required.");
    assert_eq!(error["field_errors"]["image"], "Path `image` is required.");

    let id = common::create_product(&server, &token, &common::sample_product("Kept")).await?;
    let res = client
        .put(server.url(&format!("/api/products/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "description": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let stored: Value = client
        .get(server.url(&format!("/api/products/{}", id)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(stored["description"], "Integration test product");
    Ok(())
}
