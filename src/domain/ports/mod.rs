//! Ports (trait interfaces) between the core and its adapters.

pub mod commit_search;
pub mod goal_repository;

pub use commit_search::{CommitItem, CommitPage, CommitSearch};
pub use goal_repository::GoalRepository;
