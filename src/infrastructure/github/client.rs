//! GitHub commit-search HTTP client.
//!
//! Wraps the `/search/commits` endpoint of the GitHub REST API,
//! returning one page of results per call. Pacing between pages is
//! the aggregation loop's responsibility (see
//! [`FixedIntervalGate`](super::pacing::FixedIntervalGate)); this
//! client performs no retries, so a failed page aborts the whole
//! aggregation.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{DateRange, GithubConfig};
use crate::domain::ports::{CommitPage, CommitSearch};

/// Media type that enables commit search on the GitHub API.
const COMMIT_SEARCH_ACCEPT: &str = "application/vnd.github.cloak-preview";

/// Per-request timeout; there is deliberately no overall timeout
/// around a full aggregation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the GitHub commit-search API.
#[derive(Debug, Clone)]
pub struct GithubSearchClient {
    http: Client,
    api_base: String,
    token: String,
}

impl GithubSearchClient {
    /// Create a client from configuration.
    ///
    /// The bearer token comes from `github.token` when set, otherwise
    /// from the `GITHUB_TOKEN` environment variable.
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let token = match &config.token {
            Some(token) if !token.is_empty() => token.clone(),
            _ => std::env::var("GITHUB_TOKEN").context(
                "GitHub token not configured: set github.token or the GITHUB_TOKEN environment variable",
            )?,
        };
        Self::with_token(config.api_base.clone(), token)
    }

    /// Create a client against an explicit base URL with an explicit
    /// token.
    pub fn with_token(api_base: String, token: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base,
            token,
        })
    }
}

#[async_trait]
impl CommitSearch for GithubSearchClient {
    async fn search_page(
        &self,
        author: &str,
        range: &DateRange,
        per_page: u32,
        page: u32,
    ) -> DomainResult<CommitPage> {
        let url = format!(
            "{}/search/commits?q=author:{}+author-date:{}..{}&sort=author-date&order=desc&per_page={}&page={}",
            self.api_base, author, range.since, range.until, per_page, page
        );

        debug!(author, page, "requesting commit search page");

        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", COMMIT_SEARCH_ACCEPT)
            .header("User-Agent", "pacer")
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<CommitPage>()
            .await
            .map_err(|e| DomainError::Decode(e.to_string()))
    }
}
