mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "calculator-service");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Without a caller-supplied id, one is generated.
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    let generated = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .expect("ascii header value");
    assert!(!generated.is_empty());

    // A caller-supplied id is echoed back.
    let response = client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "test-request-id")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-request-id"
    );
}

#[tokio::test]
async fn service_index_lists_endpoints() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["service"], "calculator-service");
    let endpoints = body["endpoints"].as_array().expect("endpoints array");
    assert!(endpoints.contains(&serde_json::json!("/calculator")));
}
