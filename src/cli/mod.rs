//! Command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};

use commands::goal::GoalArgs;
use commands::serve::ServeArgs;
use commands::status::StatusArgs;

/// GitHub commit goal tracker with pacing projections.
#[derive(Parser, Debug)]
#[command(name = "pacer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// One-shot aggregation and pacing report
    Status(StatusArgs),
    /// Read or overwrite the persisted yearly target
    Goal(GoalArgs),
}

/// Print a failure and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        eprintln!("{}", serde_json::json!({ "error": err.to_string() }));
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
