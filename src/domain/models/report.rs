use serde::{Deserialize, Serialize};

/// Whether the commit count is ahead of or behind the expected linear pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "commits")]
pub enum PaceStatus {
    /// At or above the expected pace by this many commits.
    Ahead(u64),
    /// Below the expected pace by this many commits.
    Behind(u64),
}

/// Per-period commit quotas needed to close the gap by year end.
///
/// All values are linear extrapolations of `daily` and are left
/// unclamped: a target already met drives them to zero or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaPlan {
    pub daily: i64,
    pub weekly: i64,
    pub monthly: i64,
    pub quarterly: i64,
    pub semi_annual: i64,
}

/// Derived pacing report for a yearly commit goal.
///
/// Recomputed on every aggregation; never persisted. `quotas` is
/// `None` exactly when the goal period has ended (computed on
/// Dec 31, when no days remain to spread the gap over).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Commits counted so far this year.
    pub total: u64,
    /// The yearly target being tracked.
    pub target: u64,
    /// Days elapsed since Jan 1, inclusive of today.
    pub elapsed_days: i64,
    /// Days left until Dec 31.
    pub remaining_days: i64,
    /// Commits a perfectly linear pace would have produced by today.
    pub expected: i64,
    /// Ahead/behind classification of `total - expected`.
    pub pace: PaceStatus,
    pub quotas: Option<QuotaPlan>,
}

impl ProgressReport {
    /// Human-readable pace summary.
    pub fn pace_message(&self) -> String {
        match self.pace {
            PaceStatus::Ahead(n) => {
                format!("You're ahead by {n} commits! Keep up the good work!")
            }
            PaceStatus::Behind(n) => {
                format!("You're behind by {n} commits. Time to catch up!")
            }
        }
    }

    /// Human-readable quota summary, or the terminal message when the
    /// goal period has ended.
    pub fn quota_message(&self) -> String {
        match self.quotas {
            Some(q) => format!(
                "To reach your goal, you need to make:\n\
                 - {} commits per day\n\
                 - {} commits per week\n\
                 - {} commits per month\n\
                 - {} commits per quarter\n\
                 - {} commits in the next 6 months",
                q.daily, q.weekly, q.monthly, q.quarterly, q.semi_annual
            ),
            None => "Goal period ended.".to_string(),
        }
    }
}
