//! `pacer status` — one-shot aggregation and pacing report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use comfy_table::Table;

use crate::domain::models::{DateRange, ProgressReport};
use crate::domain::ports::GoalRepository;
use crate::infrastructure::database::GoalRepositoryImpl;
use crate::infrastructure::logging;
use crate::services::ProgressPlanner;

use super::{build_aggregator, load_config, open_database};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Start of the commit window (defaults to Jan 1 of this year)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// End of the commit window (defaults to today)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Yearly target to plan against (defaults to the saved goal)
    #[arg(long)]
    pub target: Option<u64>,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub async fn execute(args: StatusArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    logging::init(&config.logging);

    let today = Local::now().date_naive();
    let since = args.since.unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 exists in every year")
    });
    let until = args.until.unwrap_or(today);
    let range = DateRange::new(since, until)?;

    let target = match args.target {
        Some(target) => target,
        None => {
            let db = open_database(&config.database).await?;
            let goals = GoalRepositoryImpl::new(db.pool().clone());
            goals
                .load(&config.goal.slot)
                .await?
                .context("No yearly target saved; run `pacer goal set <n>` or pass --target")?
        }
    };

    let aggregator = build_aggregator(&config)?;
    let total = aggregator.aggregate(&config.github.username, &range).await?;
    let report = ProgressPlanner::compute_progress(total, target, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&range, &report);
    }

    Ok(())
}

fn print_report(range: &DateRange, report: &ProgressReport) {
    let mut table = Table::new();
    table.set_header(vec!["", "Commits"]);
    table.add_row(vec![
        format!("Counted ({} .. {})", range.since, range.until),
        report.total.to_string(),
    ]);
    table.add_row(vec!["Yearly target".to_string(), report.target.to_string()]);
    table.add_row(vec![
        format!("Expected by day {}", report.elapsed_days),
        report.expected.to_string(),
    ]);
    println!("{table}");

    println!("\n{}", report.pace_message());
    println!("\n{}", report.quota_message());
}
