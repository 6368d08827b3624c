//! Progress projection against a yearly commit goal.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::{PaceStatus, ProgressReport, QuotaPlan};

/// Fixed year divisor for the expected pace; leap years are
/// intentionally ignored.
const DAYS_PER_YEAR: f64 = 365.0;

/// Pure pacing arithmetic over (total, target, today).
///
/// The goal year is the calendar year containing `today`. Calling
/// [`compute_progress`](ProgressPlanner::compute_progress) twice with
/// identical inputs yields identical output; there is no hidden
/// state.
pub struct ProgressPlanner;

impl ProgressPlanner {
    /// Compute a pacing report for `total` commits against `target`.
    ///
    /// Day counts are date-only: `elapsed_days` counts today
    /// inclusively (Jan 1 -> 1), `remaining_days` counts full days up
    /// to Dec 31 (Dec 31 -> 0). On Dec 31 the quota plan is `None`
    /// rather than dividing by zero.
    pub fn compute_progress(total: u64, target: u64, today: NaiveDate) -> ProgressReport {
        let start_of_year = start_of_year(today);
        let end_of_year = end_of_year(today);

        let elapsed_days = (today - start_of_year).num_days() + 1;
        let remaining_days = (end_of_year - today).num_days();

        let expected = (target as f64 * elapsed_days as f64 / DAYS_PER_YEAR).round() as i64;
        let delta = total as i64 - expected;
        let pace = if delta >= 0 {
            PaceStatus::Ahead(delta as u64)
        } else {
            PaceStatus::Behind(delta.unsigned_abs())
        };

        let quotas = (remaining_days > 0).then(|| {
            // Unclamped: a target already met yields zero or negative
            // quotas (see DESIGN.md).
            let remaining_commits = target as i64 - total as i64;
            let daily = (remaining_commits as f64 / remaining_days as f64).ceil() as i64;
            QuotaPlan {
                daily,
                weekly: daily * 7,
                monthly: daily * 30,
                quarterly: daily * 90,
                semi_annual: daily * 180,
            }
        });

        ProgressReport {
            total,
            target,
            elapsed_days,
            remaining_days,
            expected,
            pace,
            quotas,
        }
    }
}

fn start_of_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 exists in every year")
}

fn end_of_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), 12, 31).expect("Dec 31 exists in every year")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_april_first_ahead_by_nine() {
        let report = ProgressPlanner::compute_progress(100, 365, date(2025, 4, 1));

        assert_eq!(report.elapsed_days, 91);
        assert_eq!(report.expected, 91);
        assert_eq!(report.pace, PaceStatus::Ahead(9));
    }

    #[test]
    fn test_january_first_behind_by_one() {
        let report = ProgressPlanner::compute_progress(0, 365, date(2025, 1, 1));

        assert_eq!(report.elapsed_days, 1);
        assert_eq!(report.remaining_days, 364);
        assert_eq!(report.expected, 1);
        assert_eq!(report.pace, PaceStatus::Behind(1));

        // ceil(365 / 364) = 2
        let quotas = report.quotas.unwrap();
        assert_eq!(quotas.daily, 2);
        assert_eq!(quotas.weekly, 14);
        assert_eq!(quotas.monthly, 60);
        assert_eq!(quotas.quarterly, 180);
        assert_eq!(quotas.semi_annual, 360);
    }

    #[test]
    fn test_exactly_on_pace_counts_as_ahead() {
        let report = ProgressPlanner::compute_progress(91, 365, date(2025, 4, 1));
        assert_eq!(report.pace, PaceStatus::Ahead(0));
    }

    #[test]
    fn test_december_31_is_terminal_not_a_division_error() {
        let report = ProgressPlanner::compute_progress(200, 365, date(2025, 12, 31));

        assert_eq!(report.remaining_days, 0);
        assert!(report.quotas.is_none());
        assert_eq!(report.quota_message(), "Goal period ended.");
        // The pace delta is still reported on the final day.
        assert_eq!(report.expected, 365);
        assert_eq!(report.pace, PaceStatus::Behind(165));
    }

    #[test]
    fn test_target_already_met_goes_unclamped() {
        // 400 commits against a 365 target with half a year left:
        // remaining is -35 over 183 days, which ceils to zero.
        let report = ProgressPlanner::compute_progress(400, 365, date(2025, 7, 1));

        let quotas = report.quotas.unwrap();
        assert_eq!(quotas.daily, 0);
        assert!(matches!(report.pace, PaceStatus::Ahead(_)));
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let a = ProgressPlanner::compute_progress(123, 500, date(2025, 9, 15));
        let b = ProgressPlanner::compute_progress(123, 500, date(2025, 9, 15));
        assert_eq!(a, b);
    }

    #[test]
    fn test_leap_year_still_uses_365_divisor() {
        // Dec 31 of a leap year has 366 elapsed days, so the expected
        // count overshoots the target slightly.
        let report = ProgressPlanner::compute_progress(0, 365, date(2024, 12, 31));
        assert_eq!(report.elapsed_days, 366);
        assert_eq!(report.expected, 366);
    }

    #[test]
    fn test_pace_messages() {
        let ahead = ProgressPlanner::compute_progress(100, 365, date(2025, 4, 1));
        assert_eq!(
            ahead.pace_message(),
            "You're ahead by 9 commits! Keep up the good work!"
        );

        let behind = ProgressPlanner::compute_progress(0, 365, date(2025, 1, 1));
        assert_eq!(
            behind.pace_message(),
            "You're behind by 1 commits. Time to catch up!"
        );
    }
}
