//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use bizloc_core::Coordinates;
use bizloc_geo::{GeoError, PlacesClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::new(base_url, 5, "bizloc-test/0.1").expect("client construction should not fail")
}

#[tokio::test]
async fn autocomplete_sends_query_and_parses_predictions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/autocomplete/json"))
        .and(query_param("input", "coffee"))
        .and(query_param("location", "1,2"))
        .and(query_param("radius", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "predictions": [
                {
                    "place_id": "ChIJ1",
                    "description": "Coffee Bar, Main St, Springfield",
                    "structured_formatting": {
                        "main_text": "Coffee Bar",
                        "secondary_text": "Main St, Springfield"
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client
        .autocomplete("coffee", Coordinates::new(1.0, 2.0))
        .await
        .expect("should parse predictions");

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].place_id, "ChIJ1");
    assert_eq!(
        suggestions[0].structured_formatting.secondary_text,
        "Main St, Springfield"
    );
}

#[tokio::test]
async fn autocomplete_passes_reserved_characters_as_one_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/autocomplete/json"))
        .and(query_param("input", "fish & chips"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ZERO_RESULTS", "predictions": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client
        .autocomplete("fish & chips", Coordinates::default())
        .await
        .expect("zero results is not an error");
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn autocomplete_server_error_is_not_swallowed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/autocomplete/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .autocomplete("coffee", Coordinates::default())
        .await
        .expect_err("500 must surface");
    assert!(
        matches!(err, GeoError::Http(ref e) if e.status().map(|s| s.as_u16()) == Some(500)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn autocomplete_request_denied_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "This API project is not authorized to use this API.",
            "predictions": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .autocomplete("coffee", Coordinates::default())
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, GeoError::Api { ref status, .. } if status == "REQUEST_DENIED"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn place_details_sends_place_id_and_builds_place() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/details/json"))
        .and(query_param("place_id", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "place_id": "abc123",
                "name": "Corner Bakery",
                "formatted_address": "1 Elm St, Springfield",
                "geometry": {
                    "location": { "lat": 39.78, "lng": -89.65 },
                    "viewport": {}
                },
                "website": "https://cornerbakery.example"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let place = client.place_details("abc123").await.expect("should parse");

    assert_eq!(place.place_id, "abc123");
    assert_eq!(place.structured_formatting.main_text, "Corner Bakery");
    assert_eq!(place.coordinates, Coordinates::new(39.78, -89.65));
    assert_eq!(place.website, "https://cornerbakery.example");
}

#[tokio::test]
async fn place_details_json_returns_raw_payload() {
    let server = MockServer::start().await;
    let body = json!({ "status": "OK", "result": { "name": "Raw" } });

    Mock::given(method("GET"))
        .and(path("/google/maps/place/details/json"))
        .and(query_param("place_id", "raw-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let raw = client.place_details_json("raw-1").await.expect("should fetch");
    assert_eq!(raw, body);
}

#[tokio::test]
async fn place_details_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("missing").await.expect_err("should fail");
    assert!(
        matches!(err, GeoError::NotFound { ref place_id } if place_id == "missing"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn place_details_server_error_is_not_swallowed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/google/maps/place/details/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("abc123").await.expect_err("should fail");
    assert!(matches!(err, GeoError::Http(_)), "unexpected error: {err:?}");
}
