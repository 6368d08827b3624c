//! Pacer CLI entry point.

use clap::Parser;

use pacer::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => pacer::cli::commands::serve::execute(args, cli.json).await,
        Commands::Status(args) => pacer::cli::commands::status::execute(args, cli.json).await,
        Commands::Goal(args) => pacer::cli::commands::goal::execute(args, cli.json).await,
    };

    if let Err(err) = result {
        pacer::cli::handle_error(err, cli.json);
    }
}
