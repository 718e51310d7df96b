use std::path::PathBuf;

use cadence_core::dates;
use clap::{Parser, Subcommand};
use jiff::civil::DateTime;

use crate::cli::{ItemCommands, MonthArgs, SuggestionCommands};

/// Preview a content calendar from the command line
///
/// Cadence reads a snapshot of scheduled content items and AI scheduling
/// suggestions, shows them on a month grid, and previews drafting new items
/// or acting on suggestions. The snapshot file is never written back.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the JSON dataset. Defaults to
    /// $XDG_DATA_HOME/cadence/calendar.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pin "now" to a fixed local time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_parser = parse_now)]
    pub today: Option<DateTime>,

    /// Simulated latency for submissions and refreshes, in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the month grid (default)
    #[command(alias = "m")]
    Month(MonthArgs),
    /// Show aggregate counts for the viewed month
    Summary(MonthArgs),
    /// List or draft scheduled items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Review AI scheduling suggestions
    #[command(alias = "s")]
    Suggestion {
        #[command(subcommand)]
        command: SuggestionCommands,
    },
}

fn parse_now(raw: &str) -> Result<DateTime, String> {
    dates::parse_local(raw).ok_or_else(|| format!("invalid date/time '{raw}'"))
}
