//! The vacation roster store.
//!
//! This module handles:
//! - Applying local edits (status toggles, start-date changes)
//! - Computing dirtiness against the last-synchronized baseline
//! - Loading the roster from the read endpoint and submitting the changed
//!   subset to the write endpoint

use chrono::{Local, NaiveDate};

use crate::api::{WebhookClient, WireMember};
use crate::config::EndpointConfig;
use crate::error::SyncError;

use super::diff::{self, Baseline};
use super::models::{Member, VacationStatus};

/// Owns the canonical member list and its last-synchronized baseline.
///
/// All mutation and diffing logic lives here; the presentation layer calls
/// through this interface and renders the result. Only one load or save
/// may be in flight at a time; a second call fails fast with
/// [`SyncError::OperationInFlight`] instead of racing on the shared
/// busy/error state.
#[derive(Debug)]
pub struct VacationStore {
    client: WebhookClient,
    members: Vec<Member>,
    baseline: Baseline,
    busy: bool,
    last_error: Option<String>,
}

impl VacationStore {
    pub fn new(config: EndpointConfig) -> Self {
        Self::with_client(WebhookClient::new(config))
    }

    pub fn with_client(client: WebhookClient) -> Self {
        Self {
            client,
            members: Vec::new(),
            baseline: Baseline::new(),
            busy: false,
            last_error: None,
        }
    }

    /// Current working list, in roster order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// True while a load or save is running.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Message from the most recent failed operation, if any. Cleared at
    /// the start of the next load or save.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True when there are unsaved edits.
    pub fn dirty(&self) -> bool {
        diff::is_dirty(&self.members, &self.baseline)
    }

    /// Members whose synchronized fields differ from the baseline, in
    /// working-list order.
    pub fn changed_members(&self) -> Vec<&Member> {
        diff::changed(&self.members, &self.baseline)
    }

    /// Replace the roster with a fresh fetch from the read endpoint.
    ///
    /// On success both the working list and the baseline are replaced with
    /// the normalized response, so `dirty()` is false afterwards. On
    /// failure the previous working list and baseline are untouched.
    pub async fn load(&mut self) -> Result<(), SyncError> {
        self.begin_operation()?;
        let result = self.client.fetch_members().await;
        self.busy = false;

        let records = match result {
            Ok(records) => records,
            Err(err) => {
                self.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        let today = Local::now().date_naive();
        self.members = records
            .into_iter()
            .map(|record| record.into_member(today))
            .collect();
        self.baseline = diff::snapshot(&self.members);

        log::info!("Loaded {} members from the read endpoint", self.members.len());
        Ok(())
    }

    /// Submit the changed subset to the write endpoint.
    ///
    /// Every changed record is submitted regardless of which direction its
    /// status moved. On success the baseline is reset to a full snapshot
    /// of the working list; on failure both lists are left exactly as they
    /// were. When nothing changed, the network call is skipped entirely.
    pub async fn save(&mut self) -> Result<(), SyncError> {
        self.begin_operation()?;

        let changes: Vec<WireMember> = self
            .changed_members()
            .into_iter()
            .map(WireMember::from_member)
            .collect();

        if changes.is_empty() {
            log::info!("No unsaved changes, skipping save");
            self.busy = false;
            return Ok(());
        }

        let result = self.client.submit_changes(&changes).await;
        self.busy = false;

        if let Err(err) = result {
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        self.baseline = diff::snapshot(&self.members);
        log::info!("Saved {} changed members", changes.len());
        Ok(())
    }

    /// Flip a member's vacation status.
    ///
    /// Entering vacation with no start date assigns today's date; going
    /// back to working keeps the stored date. An unknown id is a no-op.
    pub fn toggle_status(&mut self, id: &str) {
        self.toggle_status_at(id, Local::now().date_naive());
    }

    fn toggle_status_at(&mut self, id: &str, today: NaiveDate) {
        let Some(member) = self.members.iter_mut().find(|m| m.id == id) else {
            log::debug!("toggle_status: no member with id {}", id);
            return;
        };

        member.status = member.status.toggled();
        if member.status == VacationStatus::OnVacation && member.start_date.is_none() {
            member.start_date = Some(today);
        }
    }

    /// Overwrite a member's vacation start date, whatever their status.
    ///
    /// An unknown id is a no-op.
    pub fn set_start_date(&mut self, id: &str, date: NaiveDate) {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => member.start_date = Some(date),
            None => log::debug!("set_start_date: no member with id {}", id),
        }
    }

    fn begin_operation(&mut self) -> Result<(), SyncError> {
        if self.busy {
            return Err(SyncError::OperationInFlight);
        }
        self.busy = true;
        self.last_error = None;
        Ok(())
    }
}
