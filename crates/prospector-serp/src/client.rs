//! HTTP client for the `SerpAPI` `/search` endpoint.
//!
//! Wraps `reqwest` with API key management, typed response deserialization
//! and optional retry. Non-2xx statuses surface as
//! [`SerpError::UnexpectedStatus`] and an `"error"` field in a 2xx body
//! surfaces as [`SerpError::ApiError`].

use std::time::Duration;

use prospector_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::SerpError;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::types::{OrganicResult, SearchResponse};

/// `SerpAPI` reports an empty result page as an error with this wording.
const NO_RESULTS_MARKER: &str = "hasn't returned any results";

/// Client for the `SerpAPI` search endpoint.
///
/// The binary builds one with [`SerpClient::from_config`]; tests point
/// [`SerpClient::with_base_url`] at a mock server.
pub struct SerpClient {
    client: Client,
    api_key: String,
    base_url: Url,
    retry: RetryPolicy,
}

impl SerpClient {
    /// Creates a client for the given endpoint URL with retry disabled.
    ///
    /// # Errors
    ///
    /// Returns [`SerpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SerpError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SerpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| SerpError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            retry: RetryPolicy::NONE,
        })
    }

    /// Builds a client from the environment-derived [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`SerpClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SerpError> {
        Ok(Self::with_base_url(
            &config.serpapi_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.serpapi_base_url,
        )?
        .with_retry(RetryPolicy {
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }))
    }

    /// Replaces the retry policy. `max_retries == 0` disables retry.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Runs one Google search through `SerpAPI` and returns its organic results.
    ///
    /// # Errors
    ///
    /// - [`SerpError::UnexpectedStatus`] on a non-2xx status.
    /// - [`SerpError::ApiError`] if the body carries an `"error"` field.
    /// - [`SerpError::Http`] on network failure or timeout.
    /// - [`SerpError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(&self, query: &str, num: u32) -> Result<Vec<OrganicResult>, SerpError> {
        let url = self.build_url(query, num);
        let url = &url;
        retry_with_backoff(self.retry, move || self.request_search(url, query)).await
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str, num: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("engine", "google")
            .append_pair("q", query)
            .append_pair("num", &num.to_string())
            .append_pair("hl", "en")
            .append_pair("api_key", &self.api_key);
        url
    }

    /// Sends one GET and decodes the body. The URL carries the API key, so
    /// it never appears in errors or logs.
    async fn request_search(
        &self,
        url: &Url,
        query: &str,
    ) -> Result<Vec<OrganicResult>, SerpError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SerpError::UnexpectedStatus {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SerpError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        if let Some(message) = parsed.error {
            if message.contains(NO_RESULTS_MARKER) {
                tracing::debug!(query, "SerpAPI returned no results");
                return Ok(Vec::new());
            }
            return Err(SerpError::ApiError(message));
        }

        Ok(parsed.organic_results)
    }
}

/// Pulls the `"error"` field from a failed response, falling back to the
/// start of the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<SearchResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or_else(|| body.chars().take(200).collect())
}
