//! Infrastructure layer: external integrations and adapters.

pub mod config;
pub mod database;
pub mod github;
pub mod logging;
