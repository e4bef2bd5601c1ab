use thiserror::Error;

/// Errors returned by the geolocation and place-search clients.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Network failure or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 2xx but reported a failure in the body.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: &'static str,
        status: String,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but lacks a field the typed record needs.
    #[error("missing field `{field}` in {context}")]
    MissingField {
        context: String,
        field: &'static str,
    },

    #[error("place not found: {place_id}")]
    NotFound { place_id: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
