//! `pacer serve` — run the HTTP API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::infrastructure::database::GoalRepositoryImpl;
use crate::infrastructure::logging;
use crate::server::{self, AppState};

use super::{build_aggregator, load_config, open_database};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, _json: bool) -> Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init(&config.logging);

    info!(
        username = %config.github.username,
        db_path = %config.database.path,
        "starting pacer"
    );

    let db = open_database(&config.database).await?;
    let goals = Arc::new(GoalRepositoryImpl::new(db.pool().clone()));
    let aggregator = build_aggregator(&config)?;

    let state = AppState {
        aggregator,
        goals,
        username: config.github.username.clone(),
        goal_slot: config.goal.slot.clone(),
    };

    server::serve(&config.server, state).await
}
