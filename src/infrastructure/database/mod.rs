//! SQLite persistence for the yearly commit target.

pub mod connection;
pub mod goal_repo;

pub use connection::DatabaseConnection;
pub use goal_repo::GoalRepositoryImpl;
