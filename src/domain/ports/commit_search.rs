use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::models::DateRange;

/// A single commit returned by the search endpoint.
///
/// Only the identifying fields are kept; the aggregation loop cares
/// about item counts, not commit contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitItem {
    pub sha: String,
}

/// One page of commit search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitPage {
    /// Total matches reported by the search index (advisory; the
    /// aggregation sums item counts instead of trusting it).
    #[serde(default)]
    pub total_count: u64,

    /// Matching commits on this page.
    #[serde(default)]
    pub items: Vec<CommitItem>,
}

/// Port for a paginated remote commit-search endpoint.
///
/// Pages are 1-indexed. Implementations return the page as served by
/// the remote API and map transport and status failures to
/// [`DomainError`](crate::domain::errors::DomainError) variants.
#[async_trait]
pub trait CommitSearch: Send + Sync {
    /// Fetch up to `per_page` commits by `author` within `range`,
    /// ordered by author date descending.
    async fn search_page(
        &self,
        author: &str,
        range: &DateRange,
        per_page: u32,
        page: u32,
    ) -> DomainResult<CommitPage>;
}
