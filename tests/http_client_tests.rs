//! Integration tests for the HTTP transport layer.
//!
//! These tests verify client configuration, header injection, error
//! serialization, and the retry loop for throttled responses.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azure_arm::{
    AccessToken, ApiVersion, ArmConfig, Endpoint, HttpClient, HttpError, HttpMethod, HttpRequest,
};

fn config_for(server: &MockServer) -> ArmConfig {
    ArmConfig::builder()
        .api_version(ApiVersion::new("2021-04-01").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_request_sends_bearer_token_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/resources"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("api-version", "2021-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1/resources")
        .query_param("api-version", "2021-04-01")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
    assert_eq!(response.body, json!({"value": []}));
}

#[tokio::test]
async fn test_absolute_urls_bypass_the_configured_endpoint() {
    let other = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/operations/op-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "Succeeded"})))
        .mount(&other)
        .await;

    // client configured against a server that never receives the request
    let main = MockServer::start().await;
    let client = HttpClient::new(&config_for(&main));

    let request = HttpRequest::builder(
        HttpMethod::Get,
        format!("{}/operations/op-1", other.uri()),
    )
    .build()
    .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body["status"], "Succeeded");
}

#[tokio::test]
async fn test_service_error_carries_code_and_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(409)
                .insert_header("x-ms-request-id", "req-42")
                .set_body_json(json!({
                    "error": {"code": "Conflict", "message": "Already exists."}
                })),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 409);
            assert_eq!(e.error_code.as_deref(), Some("Conflict"));
            assert_eq!(e.request_id.as_deref(), Some("req-42"));
            assert!(e.message.contains("Already exists."));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_throttled_request_is_retried_when_tries_allow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"error": {"code": "TooManyRequests"}})),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1")
        .tries(3)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_retries_exhausted_yields_max_retries_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"error": {"code": "TooManyRequests"}})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1")
        .tries(2)
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::MaxRetries(e)) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 2);
        }
        other => panic!("expected max retries error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_try_does_not_retry_throttled_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub-1")
        .build()
        .unwrap();

    // default tries = 1: the throttled response surfaces immediately
    assert!(matches!(
        client.request(request).await,
        Err(HttpError::Response(_))
    ));
}

#[tokio::test]
async fn test_put_sends_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Put, "/subscriptions/sub-1/resourceGroups/rg")
        .body(json!({"location": "westus2"}))
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server));
    let request = HttpRequest::builder(HttpMethod::Delete, "/subscriptions/sub-1/whatever")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}
