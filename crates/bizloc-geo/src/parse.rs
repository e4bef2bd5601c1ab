//! Conversion from raw provider payloads into typed records.
//!
//! Each function first checks the provider's in-body error signalling (both
//! ipstack and Google answer HTTP 200 on many failures), then deserializes
//! and maps the payload. Shape mismatches fail; nothing is defaulted silently
//! except optional display fields.

use bizloc_core::{Coordinates, Place, PlaceSuggestion, StructuredFormatting};
use serde_json::Value;

use crate::error::GeoError;
use crate::types::{
    AutocompleteResponse, GoogleStatus, IpLocation, IpstackFailure, PlaceDetailsResponse,
};

const IPSTACK: &str = "ipstack";
const GOOGLE_PLACES: &str = "google places";

/// Parses an ipstack `check` response.
///
/// # Errors
///
/// - [`GeoError::Api`] if the body carries `"success": false`.
/// - [`GeoError::Deserialize`] if the body is not a location object.
pub fn parse_ip_location(body: Value) -> Result<IpLocation, GeoError> {
    check_ipstack_error(&body)?;
    serde_json::from_value(body).map_err(|e| GeoError::Deserialize {
        context: "ipstack check".to_owned(),
        source: e,
    })
}

/// Parses an autocomplete response into suggestions, in provider order.
///
/// `ZERO_RESULTS` yields an empty list.
///
/// # Errors
///
/// - [`GeoError::Api`] for any status other than `OK` or `ZERO_RESULTS`.
/// - [`GeoError::MissingField`] if the `status` field is absent.
/// - [`GeoError::Deserialize`] if a prediction does not match the expected shape.
pub fn parse_autocomplete(body: Value) -> Result<Vec<PlaceSuggestion>, GeoError> {
    let status = google_status(&body, "autocomplete")?;
    match status.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        _ => return Err(google_api_error(status)),
    }

    let response: AutocompleteResponse =
        serde_json::from_value(body).map_err(|e| GeoError::Deserialize {
            context: "autocomplete".to_owned(),
            source: e,
        })?;
    Ok(response.predictions)
}

/// Parses a place-details response into a [`Place`].
///
/// Field mapping: `name` becomes the main text, `formatted_address` (or
/// `vicinity`) the secondary text, `geometry.location` the coordinates, and
/// a missing `website` becomes an empty string. When the result omits
/// `place_id`, the requested id is used.
///
/// # Errors
///
/// - [`GeoError::NotFound`] for `ZERO_RESULTS` or `NOT_FOUND`.
/// - [`GeoError::Api`] for any other non-`OK` status.
/// - [`GeoError::MissingField`] if `status`, `result`, `result.name`, or
///   `result.geometry.location` is absent.
/// - [`GeoError::Deserialize`] if the body does not match the expected shape.
pub fn parse_place_details(requested_id: &str, body: Value) -> Result<Place, GeoError> {
    let context = format!("place details(place_id={requested_id})");
    let status = google_status(&body, &context)?;
    match status.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => {
            return Err(GeoError::NotFound {
                place_id: requested_id.to_owned(),
            })
        }
        _ => return Err(google_api_error(status)),
    }

    let response: PlaceDetailsResponse =
        serde_json::from_value(body).map_err(|e| GeoError::Deserialize {
            context: context.clone(),
            source: e,
        })?;

    let missing = |field| GeoError::MissingField {
        context: context.clone(),
        field,
    };

    let result = response.result.ok_or_else(|| missing("result"))?;
    let coordinates: Coordinates = result
        .geometry
        .and_then(|g| g.location)
        .ok_or_else(|| missing("result.geometry.location"))?;
    let name = result.name.ok_or_else(|| missing("result.name"))?;
    let secondary_text = result
        .formatted_address
        .or(result.vicinity)
        .unwrap_or_default();

    Ok(Place {
        place_id: result
            .place_id
            .unwrap_or_else(|| requested_id.to_owned()),
        structured_formatting: StructuredFormatting {
            main_text: name,
            secondary_text,
        },
        coordinates,
        website: result.website.unwrap_or_default(),
    })
}

fn check_ipstack_error(body: &Value) -> Result<(), GeoError> {
    if body.get("success").and_then(Value::as_bool) != Some(false) {
        return Ok(());
    }

    let (status, message) = match serde_json::from_value::<IpstackFailure>(body.clone()) {
        Ok(failure) => {
            let status = failure
                .error
                .kind
                .or_else(|| failure.error.code.map(|c| c.to_string()))
                .unwrap_or_else(|| "unknown".to_owned());
            let message = failure
                .error
                .info
                .unwrap_or_else(|| "unknown error".to_owned());
            (status, message)
        }
        Err(_) => ("unknown".to_owned(), "unknown error".to_owned()),
    };

    tracing::warn!(%status, %message, "ipstack reported an error");
    Err(GeoError::Api {
        provider: IPSTACK,
        status,
        message,
    })
}

fn google_status(body: &Value, context: &str) -> Result<GoogleStatus, GeoError> {
    if body.get("status").is_none() {
        return Err(GeoError::MissingField {
            context: context.to_owned(),
            field: "status",
        });
    }
    serde_json::from_value(body.clone()).map_err(|e| GeoError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

fn google_api_error(status: GoogleStatus) -> GeoError {
    let message = status
        .error_message
        .unwrap_or_else(|| "no error message".to_owned());
    tracing::warn!(status = %status.status, %message, "google places reported an error");
    GeoError::Api {
        provider: GOOGLE_PLACES,
        status: status.status,
        message,
    }
}
