//! Set one member's vacation start date and submit the change.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::*;

use crate::sync::VacationStore;

pub async fn handle(store: &mut VacationStore, id: &str, date: NaiveDate) -> Result<()> {
    store.load().await.context("Failed to load the roster")?;

    if !store.members().iter().any(|m| m.id == id) {
        anyhow::bail!("No member with id '{}'", id);
    }

    store.set_start_date(id, date);

    if let Some(member) = store.members().iter().find(|m| m.id == id) {
        println!(
            "{} starts vacation on {}",
            member.name,
            date.format("%Y-%m-%d").to_string().bold()
        );
    }

    store.save().await.context("Failed to save the change")?;
    println!("{}", "Saved.".green());
    Ok(())
}
