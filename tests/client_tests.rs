//! Integration tests for client configuration, session headers and error
//! handling against a mock Data2Rest server.

use data2rest::{ApiError, ApiVersion, Data2RestClient, HttpError, Query};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer, version: ApiVersion) -> Data2RestClient {
    Data2RestClient::with_version(&server.uri(), "test-api-key", version).unwrap()
}

// ============================================================================
// Session Header Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_api_key_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/5/users/1"))
        .and(header("X-API-KEY", "test-api-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V1);
    let record = client.database(5).table("users").find(1).await.unwrap();

    assert_eq!(record, json!({"id": 1}));
}

#[tokio::test]
async fn test_v2_requests_negotiate_versioned_accept_header() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/db/5/users/1"))
        .and(header("Accept", "application/vnd.data2rest.v2+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let result = client.database(5).table("users").delete(1).await.unwrap();

    assert_eq!(result, json!({"deleted": 1}));
}

#[tokio::test]
async fn test_v1_requests_do_not_send_versioned_accept_header() {
    let server = MockServer::start().await;

    // Registered first so it would win if it matched.
    Mock::given(header("Accept", "application/vnd.data2rest.v2+json"))
        .respond_with(ResponseTemplate::new(418))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/db/5/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V1);
    let records = client
        .database(5)
        .table("users")
        .get(&Query::new())
        .await
        .unwrap();

    assert_eq!(records, json!([]));
}

#[tokio::test]
async fn test_default_client_uses_v2() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Accept", "application/vnd.data2rest.v2+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Data2RestClient::new(&server.uri(), "test-api-key").unwrap();
    let body = client.database(1).table("t").find(1).await.unwrap();

    assert_eq!(body, json!({"ok": true}));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_json_error_body_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/db/5/users/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Record not found"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let error = client
        .database(5)
        .table("users")
        .find(999)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "[404] Record not found");
    assert!(matches!(
        error,
        HttpError::Api(ApiError { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_error_body_without_error_field_is_unknown_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/db/5/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "bad"})))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let error = client
        .database(5)
        .table("users")
        .create(&json!({}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "[400] Unknown Error");
    assert_eq!(error.status(), Some(400));
}

#[tokio::test]
async fn test_non_json_error_body_uses_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/db/5/users/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let error = client
        .database(5)
        .table("users")
        .update(1, &json!({"name": "x"}))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "[500] oops");
}

#[tokio::test]
async fn test_non_json_success_body_is_wrapped() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/db/5/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let body = client.database(5).table("users").delete(1).await.unwrap();

    assert_eq!(body, json!({"error": "deleted"}));
}

#[tokio::test]
async fn test_authentication_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/db/5/users/bulk"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": "Invalid or inactive API Key"})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, ApiVersion::V2);
    let error = client
        .database(5)
        .table("users")
        .bulk(&[json!({"op": "delete", "id": 1})])
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "[403] Invalid or inactive API Key");
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // Nothing listens on port 1.
    let client = Data2RestClient::new("http://127.0.0.1:1", "test-api-key").unwrap();
    let result = client.database(5).table("users").find(1).await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[test]
fn test_invalid_configuration_is_rejected() {
    assert!(Data2RestClient::new("", "key").is_err());
    assert!(Data2RestClient::new("api.example.com", "key").is_err());
    assert!(Data2RestClient::new("https://api.example.com", "").is_err());
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Data2RestClient>();
}
