//! CLI command implementations.

pub mod goal;
pub mod serve;
pub mod status;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::{Config, DatabaseConfig};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::github::GithubSearchClient;
use crate::services::CommitAggregator;

/// Load configuration, honoring an explicit `--config` path.
pub(crate) fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Open (and migrate) the goal database, creating parent directories
/// as needed.
pub(crate) async fn open_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let parent = std::path::Path::new(&config.path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let db = DatabaseConnection::new(
        &format!("sqlite:{}", config.path),
        config.max_connections,
    )
    .await?;
    db.migrate().await?;
    Ok(db)
}

/// Build the aggregator from configuration.
pub(crate) fn build_aggregator(config: &Config) -> Result<Arc<CommitAggregator>> {
    let client = GithubSearchClient::new(&config.github)?;
    Ok(Arc::new(CommitAggregator::new(
        Arc::new(client),
        &config.pacing,
        config.github.per_page,
    )))
}
