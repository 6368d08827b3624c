//! Service layer: commit aggregation and progress planning.

pub mod aggregator;
pub mod planner;

pub use aggregator::CommitAggregator;
pub use planner::ProgressPlanner;
