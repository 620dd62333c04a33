//! Integration tests for the HTTP transport.
//!
//! These tests verify default headers, error translation, and the
//! rate-limit lock window handling against a mock server.

use std::time::Duration;

use ecwid_api::clients::rest::{RestClient, RestError};
use ecwid_api::{ApiUrl, EcwidConfig, HttpClient, HttpError, HttpMethod, HttpRequest};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, max_seconds_to_wait: u64) -> EcwidConfig {
    EcwidConfig::builder()
        .api_url(ApiUrl::new(format!("{}/api/v1", server.uri())).unwrap())
        .max_seconds_to_wait(max_seconds_to_wait)
        .user_agent_prefix("OrdersSync/2.1")
        .build()
        .unwrap()
}

fn get(path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, path).build().unwrap()
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/1003/profile"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"storeId": 1003})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 5));
    let response = client
        .request(get("/1003/profile"), &CancellationToken::new())
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["storeId"], 1003);
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Wrong date format"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 5));
    let error = client
        .request(get("1003/orders"), &CancellationToken::new())
        .await
        .unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 400);
            assert_eq!(e.message, "Wrong date format");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 5));
    let error = client
        .request(get("1003/orders"), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(403));
    assert_eq!(error.to_string(), "HTTP 403: Forbidden");
}

// ============================================================================
// Rate limiting
// ============================================================================

#[tokio::test]
async fn test_locked_response_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0, "total": 0})))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 5));
    let response = client
        .request(get("1003/orders"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_lock_outlasting_max_wait_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0.4"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 1));
    let error = client
        .request(get("1003/orders"), &CancellationToken::new())
        .await
        .unwrap_err();

    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.code, 429);
            assert!(e.tries >= 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unrepresentable_retry_after_fails_without_waiting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1e300"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 600));
    let error = client
        .request(get("1003/orders"), &CancellationToken::new())
        .await
        .unwrap_err();

    match error {
        HttpError::MaxRetries(e) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_lock_retry_can_be_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 5));
    let request = HttpRequest::builder(HttpMethod::Get, "1003/orders")
        .retry_on_lock(false)
        .build()
        .unwrap();
    let error = client
        .request(request, &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(429));
}

#[tokio::test]
async fn test_cancellation_interrupts_lock_wait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server, 600));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let result = client.request(get("1003/orders"), &cancel).await;

    assert!(matches!(result, Err(HttpError::Cancelled)));
}

// ============================================================================
// REST client
// ============================================================================

#[tokio::test]
async fn test_rest_get_json_maps_not_found_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, 5));
    let result: Option<serde_json::Value> = client
        .get_json("1003/orders", Default::default(), &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_rest_put_json_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/1003/orders/7"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updateCount": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, 5));
    let response: serde_json::Value = client
        .put_json(
            "/1003/orders/7",
            Default::default(),
            &json!({"paymentStatus": "PAID"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(response["updateCount"], 1);
    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body, json!({"paymentStatus": "PAID"}));
}

#[tokio::test]
async fn test_rest_decode_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server, 5));
    let result: Result<Vec<u64>, _> = client
        .post_json("1003/orders", Default::default(), None, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(RestError::Deserialize(_))));
}
