//! API Ninjas HTTP client
//!
//! Looks animals up by name on the API Ninjas animals endpoint.
//! See: https://api-ninjas.com/api/animals
//!
//! ## API Notes
//!
//! - Authentication is a plain `X-Api-Key` header; there is no OAuth flow.
//! - The `name` parameter is a partial match: `fox` returns every fox species.
//! - No matches is a `200` with an empty array, not a `404`.
//! - A bad key comes back as `400`/`401` with a JSON `{"error": ...}` body.

use std::time::Duration;

use super::domain::AnimalError;
use super::dto::RawAnimal;

/// Default endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/animals";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`NinjasClient`]
#[derive(Debug, Clone)]
pub struct NinjasConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl NinjasConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// API Ninjas animals client
pub struct NinjasClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl NinjasClient {
    /// Create a new client.
    ///
    /// The timeout applies to the whole request; expiry surfaces as a
    /// network error.
    pub fn new(config: NinjasConfig) -> Result<Self, AnimalError> {
        if config.api_key.trim().is_empty() {
            return Err(AnimalError::MissingApiKey);
        }

        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AnimalError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: config.api_key,
            http_client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up animals whose name matches.
    pub async fn lookup(&self, name: &str) -> Result<Vec<RawAnimal>, AnimalError> {
        let url = format!("{}?name={}", self.base_url, urlencoding::encode(name));
        tracing::info!("Fetching animals matching {:?}", name);

        let response = self
            .http_client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| AnimalError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnimalError::Http {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let animals = response
            .json::<Vec<RawAnimal>>()
            .await
            .map_err(|e| AnimalError::Parse(e.to_string()))?;

        tracing::info!("API returned {} animals for {:?}", animals.len(), name);
        Ok(animals)
    }
}
