//! Subcommand implementations. Each returns pretty-printed JSON for stdout.

use bizloc_core::{AppConfig, BusinessObject, Coordinates};
use bizloc_geo::{PlacesClient, UserLocationClient};
use serde::Serialize;

pub struct Context {
    user_location: UserLocationClient,
    places: PlacesClient,
    raw: bool,
}

impl Context {
    pub fn from_config(config: &AppConfig, raw: bool) -> anyhow::Result<Self> {
        Ok(Self {
            user_location: UserLocationClient::new(
                &config.ip_stack_key,
                config.request_timeout_secs,
                &config.user_agent,
            )?,
            places: PlacesClient::new(
                &config.api_domain,
                config.request_timeout_secs,
                &config.user_agent,
            )?,
            raw,
        })
    }

    pub async fn locate(&self) -> anyhow::Result<String> {
        if self.raw {
            return render(&self.user_location.get_user_location_json().await?);
        }
        let location = self.user_location.get_user_location().await?;
        // Unplaceable addresses come back with null coordinates.
        location.coordinates()?;
        render(&location)
    }

    /// Autocompletes `text`. Without an explicit bias the search is centered
    /// on the machine's own ipstack location.
    pub async fn search(&self, text: &str, bias: Option<Coordinates>) -> anyhow::Result<String> {
        let coordinates = if let Some(c) = bias {
            c
        } else {
            self.user_location.get_user_location().await?.coordinates()?
        };
        tracing::debug!(%coordinates, text, "searching places");

        if self.raw {
            return render(&self.places.autocomplete_json(text, coordinates).await?);
        }
        render(&self.places.autocomplete(text, coordinates).await?)
    }

    pub async fn details(&self, place_id: &str) -> anyhow::Result<String> {
        if self.raw {
            return render(&self.places.place_details_json(place_id).await?);
        }
        render(&self.places.place_details(place_id).await?)
    }

    pub async fn business(&self, place_id: &str) -> anyhow::Result<String> {
        let place = self.places.place_details(place_id).await?;
        render(&BusinessObject::from(place))
    }
}

pub fn template() -> anyhow::Result<String> {
    render(&BusinessObject::template())
}

fn render<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
