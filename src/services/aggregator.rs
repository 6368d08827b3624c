//! Commit aggregation over the paginated search endpoint.

use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{DateRange, PacingConfig};
use crate::domain::ports::CommitSearch;
use crate::infrastructure::github::FixedIntervalGate;

/// Sums commit counts across search result pages.
///
/// The loop is strictly sequential: each page request completes
/// before the next is issued, and the pacing gate is awaited before
/// every request so successive requests stay under the remote rate
/// limit. There is no retry; any failed page aborts the aggregation
/// and the partial sum is discarded.
pub struct CommitAggregator {
    search: Arc<dyn CommitSearch>,
    gate: FixedIntervalGate,
    per_page: u32,
    max_pages: u32,
}

impl CommitAggregator {
    /// Create an aggregator over the given search port.
    pub fn new(search: Arc<dyn CommitSearch>, pacing: &PacingConfig, per_page: u32) -> Self {
        Self {
            search,
            gate: FixedIntervalGate::from_millis(pacing.interval_ms),
            per_page,
            max_pages: pacing.max_pages,
        }
    }

    /// Count commits by `author` within `range`.
    ///
    /// A page returning fewer than `per_page` items is the last; an
    /// author with zero commits yields exactly one empty page. Fails
    /// with [`DomainError::PageCeiling`] if the page cap is reached
    /// before a short page.
    pub async fn aggregate(&self, author: &str, range: &DateRange) -> DomainResult<u64> {
        let mut page = 1u32;
        let mut total = 0u64;

        loop {
            if page > self.max_pages {
                return Err(DomainError::PageCeiling {
                    pages: self.max_pages,
                });
            }

            self.gate.wait().await;
            let batch = self.search.search_page(author, range, self.per_page, page).await?;

            let count = batch.items.len() as u64;
            total += count;
            debug!(page, count, total, "fetched commit search page");

            if count < u64::from(self.per_page) {
                return Ok(total);
            }
            page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tokio::time::Instant;

    use super::*;
    use crate::domain::ports::{CommitItem, CommitPage};

    /// Serves a fixed sequence of page sizes, then empty pages.
    struct StubSearch {
        page_sizes: Vec<usize>,
        requests: AtomicUsize,
        /// Fail on this 1-indexed page, if set.
        fail_on_page: Option<u32>,
    }

    impl StubSearch {
        fn new(page_sizes: Vec<usize>) -> Self {
            Self {
                page_sizes,
                requests: AtomicUsize::new(0),
                fail_on_page: None,
            }
        }

        fn failing_on(page: u32, page_sizes: Vec<usize>) -> Self {
            Self {
                fail_on_page: Some(page),
                ..Self::new(page_sizes)
            }
        }

        fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommitSearch for StubSearch {
        async fn search_page(
            &self,
            _author: &str,
            _range: &DateRange,
            _per_page: u32,
            page: u32,
        ) -> DomainResult<CommitPage> {
            self.requests.fetch_add(1, Ordering::SeqCst);

            if self.fail_on_page == Some(page) {
                return Err(DomainError::Upstream {
                    status: 503,
                    body: "upstream unavailable".to_string(),
                });
            }

            let size = self
                .page_sizes
                .get(page as usize - 1)
                .copied()
                .unwrap_or(0);
            let items = (0..size)
                .map(|i| CommitItem {
                    sha: format!("sha-{page}-{i}"),
                })
                .collect();
            Ok(CommitPage {
                total_count: self.page_sizes.iter().sum::<usize>() as u64,
                items,
            })
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        )
        .unwrap()
    }

    fn pacing(interval_ms: u64) -> PacingConfig {
        PacingConfig {
            interval_ms,
            max_pages: 50,
        }
    }

    #[tokio::test]
    async fn test_zero_commits_is_one_request() {
        let search = Arc::new(StubSearch::new(vec![0]));
        let aggregator = CommitAggregator::new(search.clone(), &pacing(0), 100);

        let total = aggregator.aggregate("octocat", &range()).await.unwrap();

        assert_eq!(total, 0);
        assert_eq!(search.requests(), 1);
    }

    #[tokio::test]
    async fn test_three_pages_sum_to_237() {
        let search = Arc::new(StubSearch::new(vec![100, 100, 37]));
        let aggregator = CommitAggregator::new(search.clone(), &pacing(0), 100);

        let total = aggregator.aggregate("octocat", &range()).await.unwrap();

        assert_eq!(total, 237);
        assert_eq!(search.requests(), 3);
    }

    #[tokio::test]
    async fn test_exact_page_boundary_needs_lookahead_request() {
        // 200 commits fill pages 1-2 exactly; a third, empty page is
        // required to learn the search is exhausted.
        let search = Arc::new(StubSearch::new(vec![100, 100]));
        let aggregator = CommitAggregator::new(search.clone(), &pacing(0), 100);

        let total = aggregator.aggregate("octocat", &range()).await.unwrap();

        assert_eq!(total, 200);
        assert_eq!(search.requests(), 3);
    }

    #[tokio::test]
    async fn test_pacing_gate_spaces_requests() {
        let search = Arc::new(StubSearch::new(vec![100, 100, 37]));
        let aggregator = CommitAggregator::new(search.clone(), &pacing(50), 100);

        let start = Instant::now();
        aggregator.aggregate("octocat", &range()).await.unwrap();
        let elapsed = start.elapsed();

        // Three requests mean two enforced gaps.
        assert!(
            elapsed >= Duration::from_millis(80),
            "Expected two pacing gaps (>= 80ms), got {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_failed_page_discards_partial_total() {
        let search = Arc::new(StubSearch::failing_on(2, vec![100, 100, 37]));
        let aggregator = CommitAggregator::new(search.clone(), &pacing(0), 100);

        let err = aggregator.aggregate("octocat", &range()).await.unwrap_err();

        assert!(matches!(err, DomainError::Upstream { status: 503, .. }));
        assert_eq!(search.requests(), 2);
    }

    #[tokio::test]
    async fn test_page_ceiling_aborts_runaway_pagination() {
        // Every page is full, so pagination would never terminate on
        // its own.
        let search = Arc::new(StubSearch::new(vec![100; 10]));
        let config = PacingConfig {
            interval_ms: 0,
            max_pages: 3,
        };
        let aggregator = CommitAggregator::new(search.clone(), &config, 100);

        let err = aggregator.aggregate("octocat", &range()).await.unwrap_err();

        assert!(matches!(err, DomainError::PageCeiling { pages: 3 }));
        assert_eq!(search.requests(), 3);
    }
}
