//! Provider response shapes.
//!
//! These model only the fields the clients read. Unknown fields are ignored,
//! and anything the typed records cannot do without is `Option` here so the
//! [`crate::parse`] boundary can report exactly what was missing.

use bizloc_core::{Coordinates, PlaceSuggestion};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

// ---------------------------------------------------------------------------
// ipstack
// ---------------------------------------------------------------------------

/// Result of an ipstack `check` lookup for the requester's own address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpLocation {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl IpLocation {
    /// The lookup's position as a coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MissingField`] when ipstack could not place the
    /// address (private ranges come back with null coordinates).
    pub fn coordinates(&self) -> Result<Coordinates, GeoError> {
        let missing = |field| GeoError::MissingField {
            context: "ipstack check".to_owned(),
            field,
        };
        let lat = self.latitude.ok_or_else(|| missing("latitude"))?;
        let lng = self.longitude.ok_or_else(|| missing("longitude"))?;
        Ok(Coordinates { lat, lng })
    }
}

/// Body of an ipstack failure: `{"success": false, "error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct IpstackFailure {
    pub error: IpstackErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IpstackErrorDetail {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

// ---------------------------------------------------------------------------
// Google Places
// ---------------------------------------------------------------------------

/// Status envelope shared by every Places web-service response.
#[derive(Debug, Deserialize)]
pub(crate) struct GoogleStatus {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<PlaceSuggestion>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceDetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetailsResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceDetailsResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    #[serde(default)]
    pub location: Option<Coordinates>,
}
