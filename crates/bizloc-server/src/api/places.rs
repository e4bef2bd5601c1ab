use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use bizloc_core::{BusinessObject, Coordinates, Place, PlaceSuggestion};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_geo_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AutocompleteParams {
    pub input: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Resolves the bias point: explicit `lat`/`lng` when both are given, the
/// stored user location when neither is.
fn bias(params: &AutocompleteParams, state: &AppState) -> Option<Coordinates> {
    match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        (None, None) => Some(state.store.user_location()),
        _ => None,
    }
}

pub(super) async fn autocomplete(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<ApiResponse<Vec<PlaceSuggestion>>>, ApiError> {
    let Some(input) = params.input.as_deref().filter(|s| !s.trim().is_empty()) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "input must be a non-empty search text",
        ));
    };
    let Some(coordinates) = bias(&params, &state) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "lat and lng must be given together",
        ));
    };

    let suggestions = state
        .places
        .autocomplete(input, coordinates)
        .await
        .map_err(|e| map_geo_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, suggestions)))
}

pub(super) async fn place_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<Place>>, ApiError> {
    let place = state
        .places
        .place_details(&place_id)
        .await
        .map_err(|e| map_geo_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, place)))
}

/// Fills a business record from the place's details.
pub(super) async fn place_business(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<BusinessObject>>, ApiError> {
    let place = state
        .places
        .place_details(&place_id)
        .await
        .map_err(|e| map_geo_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, BusinessObject::from(place))))
}
