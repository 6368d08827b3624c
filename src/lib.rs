//! Pacer - GitHub commit goal tracker
//!
//! Pacer estimates progress toward a yearly commit goal by counting
//! commits through the GitHub commit-search API and projecting a
//! pacing plan (ahead/behind delta plus per-period quotas).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, ports, and errors
//! - **Service Layer** (`services`): the aggregation loop and the pacing arithmetic
//! - **Infrastructure Layer** (`infrastructure`): GitHub client, config, persistence
//! - **Server Layer** (`server`): the HTTP API
//! - **CLI Layer** (`cli`): command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, DateRange, GithubConfig, PaceStatus, PacingConfig, ProgressReport, QuotaPlan,
    ServerConfig,
};
pub use domain::ports::{CommitPage, CommitSearch, GoalRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::github::{FixedIntervalGate, GithubSearchClient};
pub use services::{CommitAggregator, ProgressPlanner};
