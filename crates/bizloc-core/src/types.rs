//! Records shared by the clients, the server, and the CLI.

use serde::{Deserialize, Serialize};

/// A point on Earth in decimal degrees. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Renders as `lat,lng`, the form Google expects for a location bias.
impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

/// One autocomplete prediction. Predictions carry no position or website;
/// those come from a details lookup on `place_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub place_id: String,
    #[serde(default)]
    pub description: String,
    pub structured_formatting: StructuredFormatting,
}

/// A resolved place, built from a details response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub structured_formatting: StructuredFormatting,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub website: String,
}

/// The business record the selection view fills in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessObject {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub website: String,
}

impl BusinessObject {
    /// Blank record: empty name and website, positioned at the origin.
    #[must_use]
    pub const fn template() -> Self {
        Self {
            name: String::new(),
            coordinates: Coordinates::new(0.0, 0.0),
            website: String::new(),
        }
    }
}

impl From<Place> for BusinessObject {
    fn from(place: Place) -> Self {
        Self {
            name: place.structured_formatting.main_text,
            coordinates: place.coordinates,
            website: place.website,
        }
    }
}
