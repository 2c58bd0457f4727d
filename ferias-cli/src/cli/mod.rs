//! Command-line interface definitions.

pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Manage the team vacation roster from the terminal.
#[derive(Debug, Parser)]
#[command(name = "ferias-cli", version, about = "Manage the team vacation roster")]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and display the roster
    List,
    /// Flip a member's vacation status and save the change
    Toggle {
        /// Member id
        id: String,
    },
    /// Set a member's vacation start date and save the change
    SetDate {
        /// Member id
        id: String,
        /// Start date in YYYY-MM-DD form
        date: NaiveDate,
    },
    /// Edit the roster interactively, then save once
    Edit,
}
