//! dog.ceo API client for sub-breed listings.
//!
//! Requests `GET {base}/breed/{breed}/list`, which answers with
//! `{"message": ["afghan", "basset", ...], "status": "success"}`.
//! See: <https://dog.ceo/dog-api/documentation/sub-breed>

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{instrument, warn};

use super::traits::BreedSource;
use crate::config::ApiConfig;
use crate::telemetry;
use crate::{KennelError, NotFoundCause, Result};

/// Default base URL for the dog.ceo API
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Default per-request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("kennel/", env!("CARGO_PKG_VERSION"));

const SOURCE_NAME: &str = "dog-api";

/// `/breed/{breed}/list` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct BreedListResponse {
    pub message: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// [`BreedSource`] backed by the dog.ceo REST API.
///
/// Unknown breeds, HTTP errors, timeouts and unreadable bodies all come back
/// as [`KennelError::BreedNotFound`].
#[derive(Debug, Clone)]
pub struct DogApiSource {
    http: Client,
    base_url: Url,
}

impl DogApiSource {
    /// Create a source pointing at the public dog.ceo API.
    pub fn new() -> Result<Self> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a source with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Create a source from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| KennelError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the listing URL for `breed`, encoding it as a single path segment.
    pub(crate) fn breed_url(&self, breed: &str) -> Url {
        let mut url = self.base_url.clone();
        // base_url is checked to be hierarchical at construction
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["breed", breed, "list"]);
        }
        url
    }

    async fn fetch(&self, breed: &str) -> Result<Vec<String>> {
        let not_found = |cause: NotFoundCause| KennelError::not_found(breed, cause);

        let response = self
            .http
            .get(self.breed_url(breed))
            .send()
            .await
            .map_err(|e| not_found(NotFoundCause::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(not_found(NotFoundCause::Status(status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| not_found(NotFoundCause::Transport(e.to_string())))?;

        parse_breed_list(&body).map_err(not_found)
    }
}

#[async_trait]
impl BreedSource for DogApiSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    #[instrument(name = "dog_api.lookup", skip(self), fields(source = SOURCE_NAME))]
    async fn lookup(&self, breed: &str) -> Result<Vec<String>> {
        let start = Instant::now();
        let result = self.fetch(breed).await;

        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "source" => SOURCE_NAME)
            .record(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL, "source" => SOURCE_NAME, "status" => status)
            .increment(1);

        if let Err(e) = &result {
            warn!(breed, error = %e, "sub-breed lookup failed");
        }
        result
    }
}

/// Validate a base URL: it must parse and be able to take path segments.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| KennelError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(KennelError::Configuration(format!(
            "base URL {raw:?} cannot carry a path"
        )));
    }
    Ok(url)
}

/// Extract the sub-breed list from a response body.
///
/// A `status` field other than `"success"` is treated as malformed even when
/// `message` happens to be an array.
pub(crate) fn parse_breed_list(body: &str) -> std::result::Result<Vec<String>, NotFoundCause> {
    let parsed: BreedListResponse =
        serde_json::from_str(body).map_err(|e| NotFoundCause::Malformed(e.to_string()))?;
    match parsed.status.as_deref() {
        None | Some("success") => Ok(parsed.message),
        Some(other) => Err(NotFoundCause::Malformed(format!(
            "unexpected status {other:?}"
        ))),
    }
}
