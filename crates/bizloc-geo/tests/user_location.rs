//! Integration tests for `UserLocationClient` using wiremock HTTP mocks.

use bizloc_core::Coordinates;
use bizloc_geo::{GeoError, UserLocationClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> UserLocationClient {
    UserLocationClient::with_base_url("test-key", 5, "bizloc-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn get_user_location_sends_access_key_and_parses_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/check"))
        .and(query_param("access_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "134.201.250.155",
            "type": "ipv4",
            "city": "Los Angeles",
            "region_name": "California",
            "country_name": "United States",
            "country_code": "US",
            "zip": "90013",
            "latitude": 34.0453,
            "longitude": -118.2413
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let location = client.get_user_location().await.expect("should parse");

    assert_eq!(location.ip.as_deref(), Some("134.201.250.155"));
    assert_eq!(location.region_name.as_deref(), Some("California"));
    assert_eq!(
        location.coordinates().expect("coordinates"),
        Coordinates::new(34.0453, -118.2413)
    );
}

#[tokio::test]
async fn get_user_location_json_returns_raw_payload() {
    let server = MockServer::start().await;
    let body = json!({ "ip": "1.2.3.4", "latitude": 1.0, "longitude": 2.0, "extra": [1, 2] });

    Mock::given(method("GET"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let raw = client.get_user_location_json().await.expect("should fetch");
    assert_eq!(raw, body);
}

#[tokio::test]
async fn server_error_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_user_location()
        .await
        .expect_err("500 must not be swallowed");

    match err {
        GeoError::Http(e) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
            assert!(
                !e.to_string().contains("test-key"),
                "access key leaked into error: {e}"
            );
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn in_body_failure_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": {
                "code": 104,
                "type": "usage_limit_reached",
                "info": "Your monthly usage limit has been reached."
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_user_location().await.expect_err("should fail");
    assert!(
        matches!(err, GeoError::Api { ref status, .. } if status == "usage_limit_reached"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_user_location().await.expect_err("should fail");
    assert!(matches!(err, GeoError::Deserialize { .. }), "got {err:?}");
}
