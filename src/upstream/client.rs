//! Outbound client for the cocktail database API
//!
//! One bounded GET per search; no retries, no response caching. The upstream
//! body is treated as an opaque JSON document and never interpreted.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::UpstreamConfig;

/// Errors that can occur while querying the upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("upstream returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the external cocktail search endpoint
pub struct CocktailDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Build the client once at startup with a bounded request timeout
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the upstream search URL with the drink name encoded as the
    /// single `s` query parameter
    pub fn search_url(&self, name: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(&self.base_url, &[("s", name)])
    }

    /// Search for cocktails by name.
    ///
    /// Single attempt: any transport failure, timeout, or non-2xx status is
    /// an error. A 200 with no matching drinks is not an error; the body
    /// passes through as-is.
    pub async fn search(&self, name: &str) -> Result<Value, UpstreamError> {
        let url = self.search_url(name)?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body)?;
        Ok(data)
    }
}
