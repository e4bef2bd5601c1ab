//! The single page: a search box, a suggestion list, the map, and the
//! business record being filled in.

use axum::{extract::State, response::Html, Extension};
use reqwest::Url;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

const MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Select business</title>
</head>
<body>
<input id="search" type="search" placeholder="Search for your business" autocomplete="off">
<ul id="suggestions"></ul>
<div id="map" style="width:100%;height:480px"></div>
<pre id="business"></pre>
<script>
const DEFAULT_CENTER = __CENTER__;
let map;
let marker;
let business;

async function api(path, init) {
  const res = await fetch(path, init);
  const body = await res.json();
  if (!res.ok) throw new Error(body.error ? body.error.message : res.statusText);
  return body.data;
}

function show(record) {
  business = record;
  document.getElementById("business").textContent = JSON.stringify(business, null, 2);
  marker.setPosition(business.coordinates);
  map.panTo(business.coordinates);
}

async function initMap() {
  map = new google.maps.Map(document.getElementById("map"), { center: DEFAULT_CENTER, zoom: 14 });
  marker = new google.maps.Marker({ map, position: DEFAULT_CENTER });
  show(await api("/api/v1/business/template"));
  map.addListener("click", async (event) => {
    const coordinates = { lat: event.latLng.lat(), lng: event.latLng.lng() };
    show({ ...business, coordinates });
    await api("/api/v1/user-location", {
      method: "PUT",
      headers: { "content-type": "application/json" },
      body: JSON.stringify(coordinates),
    });
  });
  try {
    const center = await api("/api/v1/user-location");
    map.setCenter(center);
  } catch (err) {
    console.warn("user location unavailable", err);
  }
}

document.getElementById("search").addEventListener("input", async (event) => {
  const list = document.getElementById("suggestions");
  const text = event.target.value.trim();
  list.replaceChildren();
  if (!text) return;
  const suggestions = await api("/api/v1/places/autocomplete?input=" + encodeURIComponent(text));
  for (const suggestion of suggestions) {
    const item = document.createElement("li");
    const f = suggestion.structured_formatting;
    item.textContent = f.secondary_text ? f.main_text + ", " + f.secondary_text : f.main_text;
    item.addEventListener("click", async () => {
      list.replaceChildren();
      show(await api("/api/v1/places/" + encodeURIComponent(suggestion.place_id) + "/business"));
    });
    list.appendChild(item);
  }
});
</script>
<script async src="__MAPS_SCRIPT__"></script>
</body>
</html>
"#;

/// Renders the selection view with the Maps widget key installed and the
/// stored user location as the initial center.
pub(super) async fn select_business(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Html<String>, ApiError> {
    let script = maps_script_url(&state.google_map_api_key).map_err(|e| {
        tracing::error!(error = %e, "failed to build maps script url");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to render view")
    })?;
    let center = serde_json::to_string(&state.store.user_location()).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize map center");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to render view")
    })?;

    Ok(Html(
        PAGE.replace("__CENTER__", &center)
            .replace("__MAPS_SCRIPT__", &escape_attribute(script.as_str())),
    ))
}

fn maps_script_url(api_key: &str) -> Result<Url, String> {
    Url::parse_with_params(
        MAPS_SCRIPT_URL,
        &[
            ("key", api_key),
            ("libraries", "places"),
            ("callback", "initMap"),
        ],
    )
    .map_err(|e| e.to_string())
}

fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
