use axum::{extract::State, Extension, Json};
use bizloc_core::Coordinates;

use crate::middleware::RequestId;

use super::{map_geo_error, ApiError, ApiResponse, AppState};

/// Looks up the caller's position via ipstack and stores it.
///
/// The store is only written once the lookup has produced both coordinates.
pub(super) async fn refresh_user_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Coordinates>>, ApiError> {
    let location = state
        .user_location
        .get_user_location()
        .await
        .map_err(|e| map_geo_error(req_id.0.clone(), &e))?;
    let coordinates = location
        .coordinates()
        .map_err(|e| map_geo_error(req_id.0.clone(), &e))?;

    state
        .store
        .set_user_location(coordinates.lat, coordinates.lng);
    tracing::info!(
        lat = coordinates.lat,
        lng = coordinates.lng,
        city = location.city.as_deref().unwrap_or("unknown"),
        "user location refreshed"
    );

    Ok(Json(ApiResponse::new(req_id.0, coordinates)))
}

pub(super) async fn current_user_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Coordinates>> {
    Json(ApiResponse::new(req_id.0, state.store.user_location()))
}

/// Overwrites the stored position, e.g. after the user drops a pin.
pub(super) async fn set_user_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<Coordinates>,
) -> Json<ApiResponse<Coordinates>> {
    state.store.set_user_location(body.lat, body.lng);
    tracing::debug!(lat = body.lat, lng = body.lng, "user location set");
    Json(ApiResponse::new(req_id.0, state.store.user_location()))
}
