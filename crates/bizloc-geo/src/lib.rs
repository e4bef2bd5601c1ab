//! HTTP clients for the IP-geolocation and place-search providers.
//!
//! [`UserLocationClient`] calls ipstack directly. [`PlacesClient`] calls the
//! Google Places autocomplete and details endpoints through the API gateway.
//! Both hand raw payloads to the [`parse`] boundary, which converts them into
//! the typed records from `bizloc-core` or fails with a [`GeoError`].

pub mod error;
mod http;
pub mod ipstack;
pub mod parse;
pub mod places;
pub mod types;

pub use error::GeoError;
pub use ipstack::UserLocationClient;
pub use places::{PlacesClient, AUTOCOMPLETE_RADIUS_METERS};
pub use types::IpLocation;
