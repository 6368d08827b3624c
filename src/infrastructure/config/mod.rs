//! Configuration loading.
//!
//! Hierarchical configuration using figment:
//! defaults -> `.pacer/config.yaml` -> `.pacer/local.yaml` -> `PACER_*` env.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
