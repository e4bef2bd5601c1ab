use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeoError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, GeoError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and forces exactly one trailing slash so that
/// [`Url::join`] appends endpoint paths instead of replacing the last segment.
pub(crate) fn normalise_base_url(base_url: &str) -> Result<Url, GeoError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeoError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn join_endpoint(base: &Url, path: &str) -> Result<Url, GeoError> {
    base.join(path).map_err(|e| GeoError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

/// Sends a GET request, asserts a 2xx HTTP status, and parses the body as JSON.
///
/// With `redact_url` set, the URL is stripped from transport errors so query
/// secrets never reach logs or callers.
pub(crate) async fn get_json(
    client: &Client,
    url: &Url,
    context: &str,
    redact_url: bool,
) -> Result<serde_json::Value, GeoError> {
    let scrub = |e: reqwest::Error| {
        if redact_url {
            GeoError::Http(e.without_url())
        } else {
            GeoError::Http(e)
        }
    };

    let response = client.get(url.clone()).send().await.map_err(scrub)?;
    let response = response.error_for_status().map_err(scrub)?;
    let body = response.text().await.map_err(scrub)?;
    serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
