//! `pacer goal` — read or overwrite the persisted yearly target.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::domain::ports::GoalRepository;
use crate::infrastructure::database::GoalRepositoryImpl;
use crate::infrastructure::logging;

use super::{load_config, open_database};

#[derive(Args, Debug)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalCommands,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Save (or overwrite) the yearly commit target
    Set {
        /// Number of commits to aim for this year
        target: u64,
    },
    /// Print the saved yearly commit target
    Show,
}

pub async fn execute(args: GoalArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    logging::init(&config.logging);

    let db = open_database(&config.database).await?;
    let goals = GoalRepositoryImpl::new(db.pool().clone());

    match args.command {
        GoalCommands::Set { target } => {
            goals.save(&config.goal.slot, target).await?;
            if json {
                println!("{}", serde_json::json!({ "target": target }));
            } else {
                println!("Yearly target set to {target} commits.");
            }
        }
        GoalCommands::Show => {
            let target = goals
                .load(&config.goal.slot)
                .await?
                .context("No yearly target saved; run `pacer goal set <n>`")?;
            if json {
                println!("{}", serde_json::json!({ "target": target }));
            } else {
                println!("Yearly target: {target} commits.");
            }
        }
    }

    Ok(())
}
