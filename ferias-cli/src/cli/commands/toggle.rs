//! Toggle one member's status and submit the change.

use anyhow::{Context, Result};
use colored::*;

use crate::sync::VacationStore;

pub async fn handle(store: &mut VacationStore, id: &str) -> Result<()> {
    store.load().await.context("Failed to load the roster")?;

    if !store.members().iter().any(|m| m.id == id) {
        anyhow::bail!("No member with id '{}'", id);
    }

    store.toggle_status(id);

    if let Some(member) = store.members().iter().find(|m| m.id == id) {
        println!("{} is now {}", member.name, member.status.label().bold());
    }

    store.save().await.context("Failed to save the change")?;
    println!("{}", "Saved.".green());
    Ok(())
}
