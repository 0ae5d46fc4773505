#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use shopvault::config::AppConfig;
use shopvault::database::MemoryProductStore;
use shopvault::AppState;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-password";
pub const SESSION_SECRET: &str = "integration-test-secret";

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    /// Spawn the built server binary on a free port with the in-memory store
    pub fn spawn(extra_env: &[(&str, &str)]) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shopvault"));
        cmd.env("APP_ENV", "development")
            .env("HOST", "127.0.0.1")
            .env("PORT", port.to_string())
            .env("STORE_BACKEND", "memory")
            .env("AUTH_ADMIN_USER", ADMIN_USER)
            .env("AUTH_ADMIN_PASSWORD", ADMIN_PASSWORD)
            .env("SECURITY_SESSION_SECRET", SESSION_SECRET)
            .env("API_STRICT_VALIDATION", "false")
            .env_remove("SHOPVAULT_PORT")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        for (key, value) in extra_env {
            cmd.env(key, value);
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;
        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    pub async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Shared default-mode server for a test binary
pub async fn ensure_server() -> Result<&'static TestServer> {
    let server =
        SERVER.get_or_init(|| TestServer::spawn(&[]).expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Sign in over the JSON API and return the session token
pub async fn login_token(server: &TestServer) -> Result<String> {
    let res = reqwest::Client::new()
        .post(server.url("/api/auth/login"))
        .json(&json!({ "username": ADMIN_USER, "password": ADMIN_PASSWORD }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());
    let body: Value = res.json().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response without token")
}

pub fn sample_product(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Integration test product",
        "price": 29.99,
        "image": "/placeholder-product.svg",
        "category": "Clothing",
        "inStock": true
    })
}

/// Create a product through the API and return its `_id`
pub async fn create_product(server: &TestServer, token: &str, body: &Value) -> Result<String> {
    let res = reqwest::Client::new()
        .post(server.url("/api/products"))
        .bearer_auth(token)
        .json(body)
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "create failed: {}",
        res.status()
    );
    let product: Value = res.json().await?;
    product["_id"]
        .as_str()
        .map(str::to_string)
        .context("created product without _id")
}

/// In-process application over a fresh memory store
pub fn test_app(strict_validation: bool) -> (axum::Router, AppState) {
    let mut config = AppConfig::development();
    config.api.strict_validation = strict_validation;
    config.security.admin_username = ADMIN_USER.to_string();
    config.security.admin_password = ADMIN_PASSWORD.to_string();
    config.security.session_secret = SESSION_SECRET.to_string();
    config.security.enable_cors = false;

    let state = AppState::new(config, Arc::new(MemoryProductStore::new()))
        .expect("session keys from test config");
    (shopvault::app(state.clone()), state)
}
