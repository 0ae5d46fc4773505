mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shopvault::auth::SessionUser;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn session_cookie(state: &shopvault::AppState) -> String {
    let user = SessionUser {
        name: common::ADMIN_USER.to_string(),
        image: None,
    };
    let (token, _) = state.sessions.sign_in(&user).unwrap();
    format!("shopvault.session-token={}", token)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn form_post(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn navbar_follows_session_presence() {
    let (app, state) = common::test_app(false);

    let response = app.clone().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Sign In"));
    assert!(!html.contains("Sign Out"));

    let cookie = session_cookie(&state);
    let html = body_text(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(html.contains("Sign Out"));
    assert!(html.contains("/default-avatar.svg"));
    assert!(html.contains("/dashboard/add-product"));
}

#[tokio::test]
async fn detail_page_renders_stored_product() {
    let (app, state) = common::test_app(false);
    let mut body = common::sample_product("Sold Out Jacket");
    body["inStock"] = json!(false);
    let product = state.products.create(&body).await.unwrap();

    let response = app
        .clone()
        .oneshot(get(&format!("/products/{}", product.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Sold Out Jacket"));
    assert!(html.contains("$29.99"));
    assert!(html.contains("disabled"));
    assert!(html.contains("Back to Products"));

    let response = app
        .oneshot(get("/products/6b0f2c8e-9a8f-4a53-9d56-3f1f3f0e7c11", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Product Not Found"));
}

#[tokio::test]
async fn listing_shows_cards_and_empty_state() {
    let (app, state) = common::test_app(false);

    let html = body_text(app.clone().oneshot(get("/products", None)).await.unwrap()).await;
    assert!(html.contains("No products found"));

    let product = state
        .products
        .create(&common::sample_product("Listed Tee"))
        .await
        .unwrap();
    let html = body_text(app.oneshot(get("/products", None)).await.unwrap()).await;
    assert!(html.contains("Listed Tee"));
    assert!(html.contains(&format!("/products/{}", product.id)));
}

#[tokio::test]
async fn invalid_listing_filters_are_rejected() {
    let (app, _) = common::test_app(false);

    for uri in ["/api/products?category=Toys", "/api/products?inStock=maybe"] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"), "{}", uri);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
    }

    let response = app
        .clone()
        .oneshot(get("/api/products?category=Books&inStock=true", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/products?category=Toys", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Invalid product filter"));
    assert!(html.contains("<nav"));
}

#[tokio::test]
async fn dashboard_requires_sign_in() {
    let (app, _) = common::test_app(false);

    let response = app
        .clone()
        .oneshot(get("/dashboard/add-product", None))
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(
        location(&response),
        "/login?callbackUrl=/dashboard/add-product"
    );

    let response = app
        .oneshot(form_post("/dashboard/add-product", None, "name=Nope"))
        .await
        .unwrap();
    assert!(response.status().is_redirection());
}

#[tokio::test]
async fn form_sign_in_redirects_to_callback() {
    let (app, _) = common::test_app(false);

    let response = app
        .clone()
        .oneshot(form_post(
            "/login",
            None,
            "username=admin&password=wrong&callbackUrl=%2Fdashboard%2Fadd-product",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Invalid username or password"));

    let body = format!(
        "username={}&password={}&callbackUrl=%2Fdashboard%2Fadd-product",
        common::ADMIN_USER,
        common::ADMIN_PASSWORD
    );
    let response = app.oneshot(form_post("/login", None, &body)).await.unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/dashboard/add-product");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("shopvault.session-token="));
}

#[tokio::test]
async fn add_product_form_creates_and_redirects() {
    let (app, state) = common::test_app(false);
    let cookie = session_cookie(&state);

    let response = app
        .clone()
        .oneshot(form_post(
            "/dashboard/add-product",
            Some(&cookie),
            "name=Desk+Lamp&description=Warm+light&price=45&image=&category=Home&inStock=on",
        ))
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    let target = location(&response).to_string();
    assert!(target.starts_with("/products/"));

    let id = target.trim_start_matches("/products/");
    let product = state.products.get(id).await.unwrap();
    assert_eq!(product.name, "Desk Lamp");
    assert_eq!(product.image, "/placeholder-product.svg");
    assert!(product.in_stock);

    let response = app
        .oneshot(form_post(
            "/dashboard/add-product",
            Some(&cookie),
            "name=&description=&price=abc&image=&category=Home",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Path `name` is required."));
    assert!(html.contains("Path `description` is required."));
    assert!(html.contains("Cast to Number failed"));
}

#[tokio::test]
async fn api_gate_runs_before_handler() {
    let (app, state) = common::test_app(false);

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(common::sample_product("Gate").to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"], "Unauthorized");

    let all = state.products.list(&Default::default()).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn strict_mode_returns_400_in_process() {
    let (app, state) = common::test_app(true);
    let cookie = session_cookie(&state);

    let mut body = common::sample_product("Strict");
    body["category"] = json!("Toys");
    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bundled_images_are_svg() {
    let (app, _) = common::test_app(false);
    for path in ["/placeholder-product.svg", "/default-avatar.svg"] {
        let response = app.clone().oneshot(get(path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }
}
