//! Fetch and render the roster.

use anyhow::{Context, Result};
use colored::*;

use crate::sync::{Member, VacationStatus, VacationStore};

pub async fn handle(store: &mut VacationStore) -> Result<()> {
    store.load().await.context("Failed to load the roster")?;

    if store.members().is_empty() {
        println!("The roster is empty.");
        return Ok(());
    }

    for member in store.members() {
        println!("{}", render_member(member));
    }
    Ok(())
}

/// One roster line: id, name, status, and the start date while on vacation.
fn render_member(member: &Member) -> String {
    let status = match member.status {
        VacationStatus::Working => member.status.label().green(),
        VacationStatus::OnVacation => member.status.label().red(),
    };

    match (member.status, member.start_date) {
        (VacationStatus::OnVacation, Some(date)) => format!(
            "{}  {}  {} (since {})",
            member.id.dimmed(),
            member.name,
            status,
            date.format("%Y-%m-%d")
        ),
        _ => format!("{}  {}  {}", member.id.dimmed(), member.name, status),
    }
}
