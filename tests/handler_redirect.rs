mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use tinylink::api::handlers::{redirect_handler, shorten_handler};

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    common::seed_link(&state, "known1", "https://example.com/target").await;

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/known1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL Not Found");
}

#[tokio::test]
async fn test_redirect_preserves_exact_url() {
    let state = common::create_test_state();
    common::seed_link(
        &state,
        "exact1",
        "https://example.com/path?query=value&other=1#fragment",
    )
    .await;

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/exact1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/path?query=value&other=1#fragment"
    );
}

#[tokio::test]
async fn test_shorten_then_redirect_roundtrip() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://roundtrip.example.com/page" }))
        .await;
    response.assert_status_ok();

    let short_url = response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();
    let code = short_url.rsplit('/').next().unwrap().to_string();

    let redirect = server.get(&format!("/{code}")).await;

    assert_eq!(redirect.status_code(), 302);
    assert_eq!(
        redirect.header("location"),
        "https://roundtrip.example.com/page"
    );
}

#[tokio::test]
async fn test_colliding_code_last_write_wins() {
    let state = common::create_test_state();
    common::seed_link(&state, "clash1", "https://first.example.com").await;
    common::seed_link(&state, "clash1", "https://second.example.com").await;

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/clash1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://second.example.com");
}
