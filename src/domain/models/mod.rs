//! Domain models for commit aggregation and pacing.

pub mod config;
pub mod date_range;
pub mod report;

pub use config::{
    Config, DatabaseConfig, GithubConfig, GoalConfig, LoggingConfig, PacingConfig, ServerConfig,
};
pub use date_range::DateRange;
pub use report::{PaceStatus, ProgressReport, QuotaPlan};
