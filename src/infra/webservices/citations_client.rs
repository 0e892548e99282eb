//! Client for the citations REST web service.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::domain::{Citation, CitationsEnvelope};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Citations source trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CitationsApi: Send + Sync {
    /// Every citation the service holds for a college, in service order
    async fn college_citations(&self, college_id: u32) -> AppResult<Vec<Citation>>;
}

/// reqwest-backed implementation of CitationsApi
#[derive(Debug, Clone)]
pub struct CitationsClient {
    base_url: String,
    client: reqwest::Client,
}

impl CitationsClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.http_timeout_seconds));

        Self::from_builder(builder, &config.citations_api_url)
    }

    fn from_builder(builder: reqwest::ClientBuilder, base_url: &str) -> AppResult<Self> {
        // A builder failure is local misconfiguration, not an unreachable service
        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: normalize_base_url(base_url),
            client,
        })
    }

    /// Endpoint listing a college's citations
    pub fn college_url(&self, college_id: u32) -> String {
        format!("{}colleges/{}/citations", self.base_url, college_id)
    }
}

/// Base URLs are joined by plain concatenation, so they must end with `/`.
fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[async_trait]
impl CitationsApi for CitationsClient {
    async fn college_citations(&self, college_id: u32) -> AppResult<Vec<Citation>> {
        let url = self.college_url(college_id);
        tracing::debug!(url = %url, "Fetching college citations");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status().as_u16()));
        }

        let body: CitationsEnvelope = response.json().await?;
        Ok(body.citations)
    }
}
