//! Fixed-interval pacing gate for the commit search loop.
//!
//! GitHub's commit search endpoint is limited to roughly 30 requests
//! per minute; the aggregation loop awaits this gate before every
//! page request so successive requests are spaced at least one
//! interval apart.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Cooperative fixed-interval gate.
///
/// [`wait`](FixedIntervalGate::wait) returns immediately on the first
/// call and thereafter sleeps until at least `interval` has elapsed
/// since the previous call completed. The mutex is held across the
/// sleep so callers are strictly serialized.
#[derive(Debug)]
pub struct FixedIntervalGate {
    interval: Duration,
    last_pass: Mutex<Option<Instant>>,
}

impl FixedIntervalGate {
    /// Create a gate with the given minimum spacing between passes.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: Mutex::new(None),
        }
    }

    /// Convenience constructor from a millisecond count.
    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms))
    }

    /// Wait until one interval has passed since the previous caller
    /// went through.
    pub async fn wait(&self) {
        let mut last_pass = self.last_pass.lock().await;
        if let Some(last) = *last_pass {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        *last_pass = Some(Instant::now());
    }
}
