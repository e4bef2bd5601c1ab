mod business;
mod location;
mod places;
mod view;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use bizloc_core::{AppConfig, LocationStore};
use bizloc_geo::{GeoError, PlacesClient, UserLocationClient};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

/// Everything a handler can reach: the location store, both provider
/// clients, and the key the view hands to the Maps widget.
#[derive(Clone)]
pub struct AppState {
    pub store: LocationStore,
    pub user_location: Arc<UserLocationClient>,
    pub places: Arc<PlacesClient>,
    pub google_map_api_key: Arc<str>,
}

impl AppState {
    /// Builds both clients from configuration and starts with a fresh store.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if a client cannot be constructed or the API
    /// domain is not a valid URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeoError> {
        let user_location = UserLocationClient::new(
            &config.ip_stack_key,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let places = PlacesClient::new(
            &config.api_domain,
            config.request_timeout_secs,
            &config.user_agent,
        )?;

        Ok(Self {
            store: LocationStore::new(),
            user_location: Arc::new(user_location),
            places: Arc::new(places),
            google_map_api_key: Arc::from(config.google_map_api_key.as_str()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: String, data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "bad_gateway" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Translates a provider failure into the JSON error envelope.
///
/// Upstream failures of any kind become `bad_gateway`; only a missing place
/// is reported as the caller's `not_found`.
pub(super) fn map_geo_error(request_id: String, error: &GeoError) -> ApiError {
    match error {
        GeoError::NotFound { place_id } => {
            ApiError::new(request_id, "not_found", format!("place not found: {place_id}"))
        }
        GeoError::InvalidBaseUrl { .. } => {
            tracing::error!(error = %error, "provider client misconfigured");
            ApiError::new(request_id, "internal_error", "provider client misconfigured")
        }
        GeoError::Http(_)
        | GeoError::Api { .. }
        | GeoError::Deserialize { .. }
        | GeoError::MissingField { .. } => {
            tracing::error!(error = %error, "upstream provider request failed");
            ApiError::new(request_id, "bad_gateway", error.to_string())
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/v1/user-location",
            get(location::refresh_user_location).put(location::set_user_location),
        )
        .route(
            "/api/v1/user-location/current",
            get(location::current_user_location),
        )
        .route("/api/v1/places/autocomplete", get(places::autocomplete))
        .route("/api/v1/places/{place_id}", get(places::place_details))
        .route(
            "/api/v1/places/{place_id}/business",
            get(places::place_business),
        )
        .route("/api/v1/business/template", get(business::template))
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(view::select_business))
        .merge(api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse::new(req_id.0, HealthData { status: "ok" }))
}
