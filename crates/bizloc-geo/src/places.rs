//! Client for the Google Places endpoints exposed by the API gateway.

use bizloc_core::{Coordinates, Place, PlaceSuggestion};
use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, get_json, join_endpoint, normalise_base_url};
use crate::parse::{parse_autocomplete, parse_place_details};

/// Search radius, in meters, sent with every autocomplete request.
pub const AUTOCOMPLETE_RADIUS_METERS: u32 = 500;

const AUTOCOMPLETE_PATH: &str = "google/maps/place/autocomplete/json";
const DETAILS_PATH: &str = "google/maps/place/details/json";

/// Business-search client: autocomplete suggestions and place details.
///
/// Requests are independent. A slow response for an earlier keystroke can
/// arrive after a later one; ordering is the caller's concern.
pub struct PlacesClient {
    client: Client,
    autocomplete_url: Url,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a client rooted at the gateway's base URL (`API_DOMAIN`).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`GeoError::InvalidBaseUrl`] if `api_domain` does not parse.
    pub fn new(api_domain: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeoError> {
        let client = build_client(timeout_secs, user_agent)?;
        let base_url = normalise_base_url(api_domain)?;

        Ok(Self {
            client,
            autocomplete_url: join_endpoint(&base_url, AUTOCOMPLETE_PATH)?,
            details_url: join_endpoint(&base_url, DETAILS_PATH)?,
        })
    }

    /// Suggests places matching `text`, biased toward `coordinates`.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Api`] if Google reports a non-`OK` status.
    /// - [`GeoError::Deserialize`] if a prediction does not match the expected shape.
    pub async fn autocomplete(
        &self,
        text: &str,
        coordinates: Coordinates,
    ) -> Result<Vec<PlaceSuggestion>, GeoError> {
        let body = self.autocomplete_json(text, coordinates).await?;
        parse_autocomplete(body)
    }

    /// Same request as [`PlacesClient::autocomplete`], returning the raw payload.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the body is not JSON.
    pub async fn autocomplete_json(
        &self,
        text: &str,
        coordinates: Coordinates,
    ) -> Result<serde_json::Value, GeoError> {
        let url = self.autocomplete_request_url(text, coordinates);
        tracing::debug!(%url, "requesting place autocomplete");
        get_json(&self.client, &url, "autocomplete", false).await
    }

    /// Resolves `place_id` into a [`Place`].
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::NotFound`] if Google has no such place.
    /// - [`GeoError::Api`] for any other non-`OK` status.
    /// - [`GeoError::MissingField`] / [`GeoError::Deserialize`] on shape mismatch.
    pub async fn place_details(&self, place_id: &str) -> Result<Place, GeoError> {
        let body = self.place_details_json(place_id).await?;
        parse_place_details(place_id, body)
    }

    /// Same request as [`PlacesClient::place_details`], returning the raw payload.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the body is not JSON.
    pub async fn place_details_json(&self, place_id: &str) -> Result<serde_json::Value, GeoError> {
        let url = self.details_request_url(place_id);
        tracing::debug!(%url, "requesting place details");
        get_json(
            &self.client,
            &url,
            &format!("place details(place_id={place_id})"),
            false,
        )
        .await
    }

    fn autocomplete_request_url(&self, text: &str, coordinates: Coordinates) -> Url {
        let mut url = self.autocomplete_url.clone();
        url.query_pairs_mut()
            .append_pair("input", text)
            .append_pair("location", &coordinates.to_string())
            .append_pair("radius", &AUTOCOMPLETE_RADIUS_METERS.to_string());
        url
    }

    fn details_request_url(&self, place_id: &str) -> Url {
        let mut url = self.details_url.clone();
        url.query_pairs_mut().append_pair("place_id", place_id);
        url
    }
}
