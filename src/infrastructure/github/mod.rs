//! GitHub commit-search adapter: HTTP client and request pacing.

pub mod client;
pub mod pacing;

pub use client::GithubSearchClient;
pub use pacing::FixedIntervalGate;
