//! Client for the ipstack IP-geolocation API.

use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, get_json, join_endpoint, normalise_base_url};
use crate::parse::parse_ip_location;
use crate::types::IpLocation;

const DEFAULT_BASE_URL: &str = "https://api.ipstack.com/";

/// Looks up the requester's approximate position from its network address.
///
/// Every call is one outbound request billed against the ipstack quota.
/// Nothing is cached or retried.
pub struct UserLocationClient {
    client: Client,
    access_key: String,
    check_url: Url,
}

impl UserLocationClient {
    /// Creates a client pointed at the production ipstack API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeoError> {
        Self::with_base_url(access_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built, or
    /// [`GeoError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        access_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeoError> {
        let client = build_client(timeout_secs, user_agent)?;
        let base_url = normalise_base_url(base_url)?;
        let check_url = join_endpoint(&base_url, "check")?;

        Ok(Self {
            client,
            access_key: access_key.to_owned(),
            check_url,
        })
    }

    /// Fetches the caller's location and parses it into an [`IpLocation`].
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Api`] if ipstack reports `"success": false`.
    /// - [`GeoError::Deserialize`] if the body is not a location object.
    pub async fn get_user_location(&self) -> Result<IpLocation, GeoError> {
        let body = self.get_user_location_json().await?;
        parse_ip_location(body)
    }

    /// Fetches the caller's location and returns the provider payload as-is.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the body is not JSON.
    pub async fn get_user_location_json(&self) -> Result<serde_json::Value, GeoError> {
        tracing::debug!(endpoint = %self.check_url, "requesting user location");
        get_json(&self.client, &self.build_url(), "ipstack check", true).await
    }

    /// The `check` endpoint with the access key attached.
    fn build_url(&self) -> Url {
        let mut url = self.check_url.clone();
        url.query_pairs_mut()
            .append_pair("access_key", &self.access_key);
        url
    }
}
