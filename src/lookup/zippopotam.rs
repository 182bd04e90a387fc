use std::time::Duration;

use reqwest::{blocking::Client, redirect::Policy, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::lookup::{Geocoder, LookupError, Place};

/// Public endpoint for US zip codes.
pub const DEFAULT_BASE_URL: &str = "https://api.zippopotam.us/us";

/// Geocoder backed by the zippopotam.us HTTP API.
#[derive(Debug, Clone)]
pub struct ZippopotamGeocoder {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Response {
    places: Vec<ResponsePlace>,
}

#[derive(Debug, Deserialize)]
struct ResponsePlace {
    #[serde(rename = "place name")]
    name: String,
    state: String,
    #[serde(rename = "state abbreviation")]
    state_abbr: String,
    latitude: String,
    longitude: String,
}

impl ZippopotamGeocoder {
    /// Build a geocoder that requests `{base_url}/{zip}`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(concat!("wagemap/", env!("CARGO_PKG_VERSION")))
            .redirect(Policy::limited(10))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| LookupError::Service(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

impl Geocoder for ZippopotamGeocoder {
    fn geocode(&self, zip: &str) -> Result<Place, LookupError> {
        let url = format!("{}/{zip}", self.base_url);
        debug!(%url, "[lookup::zippopotam] GET");

        let resp = self.client.get(&url).send()
            .map_err(|e| LookupError::Service(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                debug!(%status, "[lookup::zippopotam] unexpected status");
            }
            return Err(LookupError::NotFound(zip.to_string()));
        }

        let body = resp.bytes().map_err(|e| LookupError::Service(e.to_string()))?;
        parse_response(zip, &body)
    }
}

/// Read the first place of a zippopotam.us response body.
fn parse_response(zip: &str, body: &[u8]) -> Result<Place, LookupError> {
    let response: Response = serde_json::from_slice(body)
        .map_err(|e| LookupError::Service(format!("malformed response: {e}")))?;

    let place = response.places.into_iter().next()
        .ok_or_else(|| LookupError::NotFound(zip.to_string()))?;

    let coord = |text: &str| text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        .ok_or_else(|| LookupError::Service(format!("bad coordinate {text:?}")));

    Ok(Place {
        lat: coord(&place.latitude)?,
        lon: coord(&place.longitude)?,
        name: place.name,
        state: place.state,
        state_abbr: place.state_abbr,
    })
}
