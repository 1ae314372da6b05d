//! Address → coordinate resolution against the Base Adresse Nationale.
//!
//! The geocoder has no fallback: any transport failure (timeout, non-2xx,
//! unreadable body) is reported as [`ReportError::AddressNotFound`].

use serde::Deserialize;
use shared_types::GeocodingResult;
use tracing::{debug, warn};
use url::Url;

use crate::config::EngineConfig;
use crate::error::ReportError;

/// GeoJSON feature collection returned by the geocoder
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<GeocodingFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingFeature {
    pub geometry: PointGeometry,
    pub properties: GeocodingProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct GeocodingProperties {
    pub label: String,
    pub score: f64,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub citycode: String,
    #[serde(default)]
    pub district: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    base_url: Url,
    min_score: f64,
    citycode_prefix: String,
}

impl Geocoder {
    pub fn new(http: reqwest::Client, config: &EngineConfig) -> Self {
        Self {
            http,
            base_url: config.geocoding_url.clone(),
            min_score: config.geocoding_min_score,
            citycode_prefix: config.citycode_prefix.clone(),
        }
    }

    /// Resolve a free-text address to the best candidate inside the covered city
    pub async fn geocode(&self, address: &str) -> Result<GeocodingResult, ReportError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&[("q", address), ("limit", "1")])
            .send()
            .await
            .map_err(|e| unreachable_geocoder(format!("geocoding request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(unreachable_geocoder(format!(
                "geocoding API returned {}",
                response.status()
            )));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| unreachable_geocoder(format!("unreadable geocoding response: {e}")))?;

        select_candidate(body, self.min_score, &self.citycode_prefix)
    }
}

/// Network-class failure: logged, then reported to the caller as not found
fn unreachable_geocoder(reason: String) -> ReportError {
    warn!(%reason, "geocoder unavailable");
    ReportError::address_not_found(reason)
}

/// Apply the acceptance rules to the top-ranked candidate.
///
/// Zero candidates → not found; score below `min_score` → ambiguous;
/// city code outside `citycode_prefix` → unsupported coverage.
pub fn select_candidate(
    response: GeocodingResponse,
    min_score: f64,
    citycode_prefix: &str,
) -> Result<GeocodingResult, ReportError> {
    let Some(feature) = response.features.into_iter().next() else {
        debug!("geocoder returned no candidate");
        return Err(ReportError::address_not_found("no candidate"));
    };

    let props = feature.properties;
    let [longitude, latitude] = feature.geometry.coordinates;

    if props.score < min_score {
        debug!(score = props.score, label = %props.label, "geocoding candidate rejected: low score");
        return Err(ReportError::AddressAmbiguous { score: props.score });
    }

    if !props.citycode.starts_with(citycode_prefix) {
        debug!(citycode = %props.citycode, "geocoding candidate rejected: outside coverage");
        return Err(ReportError::UnsupportedCoverage {
            citycode: props.citycode,
        });
    }

    Ok(GeocodingResult {
        latitude,
        longitude,
        formatted_address: props.label,
        postcode: props.postcode,
        citycode: props.citycode,
        district: props.district.unwrap_or_default(),
        score: props.score,
    })
}
