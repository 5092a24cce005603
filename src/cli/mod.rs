//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod settle;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Settle each-way Lucky bets against a results card
#[derive(Parser, Debug)]
#[command(name = "luckybet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Settle the slips on a results card
    Settle(SettleArgs),

    /// Validate a results card without settling it
    Check(ConfigPathArg),
}

impl Commands {
    /// Path of the card the command reads.
    #[must_use]
    pub fn config_path(&self) -> &PathBuf {
        match self {
            Commands::Settle(args) => &args.config,
            Commands::Check(args) => &args.config,
        }
    }
}

/// Shared argument for commands that only need a card path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the results card
    #[arg(short, long, default_value = "card.toml")]
    pub config: PathBuf,
}

/// Arguments for the `settle` subcommand.
#[derive(Parser, Debug)]
pub struct SettleArgs {
    /// Path to the results card
    #[arg(short, long, default_value = "card.toml")]
    pub config: PathBuf,

    /// Settle only this bettor's slip
    #[arg(long)]
    pub bettor: Option<String>,
}
