//! Command handlers for the vacation roster CLI.
//!
//! Each handler drives the store's collaborator interface (load, local
//! edits, save) and renders the result; no sync logic lives here.

mod edit;
mod list;
mod set_date;
mod toggle;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::config::EndpointConfig;
use crate::sync::VacationStore;

use super::{Cli, Command};

/// Dispatch the parsed command line to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = EndpointConfig::load(cli.config.as_deref())?;
    let mut store = VacationStore::new(config);

    match cli.command {
        Command::List => list::handle(&mut store).await,
        Command::Toggle { id } => toggle::handle(&mut store, &id).await,
        Command::SetDate { id, date } => set_date::handle(&mut store, &id, date).await,
        Command::Edit => edit::handle(&mut store).await,
    }
}
