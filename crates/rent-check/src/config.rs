//! Engine configuration.
//!
//! Defaults point to the production collaborators (Base Adresse Nationale
//! geocoder and the Paris open-data portal). Override via environment
//! variables or explicit construction for testing.

use std::time::Duration;

use url::Url;

pub const DEFAULT_GEOCODING_URL: &str = "https://api-adresse.data.gouv.fr/search/";
pub const DEFAULT_RENT_OPENDATA_URL: &str =
    "https://opendata.paris.fr/api/explore/v2.1/catalog/datasets/logement-encadrement-des-loyers/records";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Geocoding candidates below this score are considered ambiguous
pub const GEOCODING_MIN_SCORE: f64 = 0.5;

/// INSEE city codes of the covered municipality start with this prefix
pub const PARIS_CITYCODE_PREFIX: &str = "751";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub geocoding_url: Url,
    pub rent_opendata_url: Url,
    /// Hard timeout applied to every outbound request
    pub timeout_ms: u64,
    pub geocoding_min_score: f64,
    pub citycode_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geocoding_url: Url::parse(DEFAULT_GEOCODING_URL).expect("default geocoding URL is valid"),
            rent_opendata_url: Url::parse(DEFAULT_RENT_OPENDATA_URL)
                .expect("default open-data URL is valid"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            geocoding_min_score: GEOCODING_MIN_SCORE,
            citycode_prefix: PARIS_CITYCODE_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GEOCODING_API_URL` (default: [`DEFAULT_GEOCODING_URL`])
    /// - `RENT_OPENDATA_URL` (default: [`DEFAULT_RENT_OPENDATA_URL`])
    /// - `API_TIMEOUT_MS` (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            geocoding_url: env_url("GEOCODING_API_URL", DEFAULT_GEOCODING_URL)?,
            rent_opendata_url: env_url("RENT_OPENDATA_URL", DEFAULT_RENT_OPENDATA_URL)?,
            timeout_ms: match std::env::var("API_TIMEOUT_MS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
                Err(_) => DEFAULT_TIMEOUT_MS,
            },
            ..Self::default()
        })
    }

    /// Configuration with both collaborators served from one base URL (for testing).
    ///
    /// The geocoder is mounted at `/search/` and the open-data records at `/records`.
    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        let base = base.trim_end_matches('/');
        Ok(Self {
            geocoding_url: parse_url("geocoding", &format!("{base}/search/"))?,
            rent_opendata_url: parse_url("opendata", &format!("{base}/records"))?,
            ..Self::default()
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// HTTP client shared by every outbound collaborator.
    ///
    /// The timeout aborts the underlying request when it elapses.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .user_agent(concat!("rent-check/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("API_TIMEOUT_MS must be a number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
