//! Cadence CLI Application
//!
//! Command-line preview of a content calendar: month grids, drafting and
//! suggestion review against a JSON snapshot.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{CalendarBuilder, Clock, Dataset};
use clap::Parser;
use cli::{Cli, MonthArgs};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        today,
        latency_ms,
        command,
    } = Args::parse();

    let dataset = match &data_file {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => Dataset::load_default().context("Failed to load default dataset")?,
    };

    let mut builder = CalendarBuilder::new().with_dataset(dataset);
    if let Some(now) = today {
        builder = builder.with_clock(Clock::Fixed(now));
    }
    if let Some(ms) = latency_ms {
        builder = builder.with_latency(Duration::from_millis(ms));
    }
    let calendar = builder.build();

    let cli = Cli::new(calendar, TerminalRenderer::new(!no_color));

    info!("Cadence started");

    match command {
        Some(Commands::Month(args)) => cli.show_month(&args),
        Some(Commands::Summary(args)) => cli.show_summary(&args),
        Some(Commands::Item { command }) => cli.handle_item_command(command).await,
        Some(Commands::Suggestion { command }) => cli.handle_suggestion_command(command).await,
        None => cli.show_month(&MonthArgs::default()),
    }
}
