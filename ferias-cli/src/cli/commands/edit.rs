//! Interactive editing session for the roster.
//!
//! Edits accumulate locally against the loaded baseline; one save at the
//! end submits only the changed records.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::*;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::sync::{Member, VacationStatus, VacationStore};

pub async fn handle(store: &mut VacationStore) -> Result<()> {
    store.load().await.context("Failed to load the roster")?;

    if store.members().is_empty() {
        println!("The roster is empty.");
        return Ok(());
    }

    let theme = ColorfulTheme::default();

    loop {
        let mut items: Vec<String> = store.members().iter().map(member_label).collect();
        items.push(if store.dirty() {
            format!("Done ({} unsaved)", store.changed_members().len())
        } else {
            "Done".to_string()
        });

        let selection = Select::with_theme(&theme)
            .with_prompt("Pick a member to edit")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == store.members().len() {
            break;
        }

        let (id, name) = {
            let member = &store.members()[selection];
            (member.id.clone(), member.name.clone())
        };

        let actions = ["Toggle status", "Set start date", "Back"];
        let action = Select::with_theme(&theme)
            .with_prompt(format!("Edit {}", name))
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => store.toggle_status(&id),
            1 => {
                let date: NaiveDate = Input::with_theme(&theme)
                    .with_prompt("Start date (YYYY-MM-DD)")
                    .interact_text()?;
                store.set_start_date(&id, date);
            }
            _ => {}
        }
    }

    if !store.dirty() {
        println!("No changes to save.");
        return Ok(());
    }

    let save = Confirm::with_theme(&theme)
        .with_prompt(format!(
            "Save {} changed member(s)?",
            store.changed_members().len()
        ))
        .default(true)
        .interact()?;

    if save {
        store.save().await.context("Failed to save changes")?;
        println!("{}", "Changes saved.".green());
    } else {
        println!("{}", "Changes discarded.".yellow());
    }
    Ok(())
}

/// Plain-text label for the selection list.
fn member_label(member: &Member) -> String {
    match (member.status, member.start_date) {
        (VacationStatus::OnVacation, Some(date)) => format!(
            "{} ({}, since {})",
            member.name,
            member.status.label(),
            date.format("%Y-%m-%d")
        ),
        _ => format!("{} ({})", member.name, member.status.label()),
    }
}
