//! Wire-format models for the roster endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sync::models::{Member, VacationStatus};

/// Wire date format used by both endpoints.
const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// A roster record as the endpoints represent it.
///
/// Field names follow the upstream system (`nome`, `ferias`, `data`); the
/// struct maps them onto domain naming. `data` may be absent or null on
/// the wire and is dropped from output when there is no date to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMember {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ferias")]
    pub status: VacationStatus,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl WireMember {
    /// Convert into a domain member, normalizing the date.
    ///
    /// A member already on vacation with a missing, empty, or unparseable
    /// date is defaulted to `today`.
    pub fn into_member(self, today: NaiveDate) -> Member {
        let parsed = self.date.as_deref().and_then(parse_wire_date);
        let start_date = match (self.status, parsed) {
            (VacationStatus::OnVacation, None) => Some(today),
            (_, parsed) => parsed,
        };

        Member {
            id: self.id,
            name: self.name,
            status: self.status,
            start_date,
        }
    }

    /// Build the wire representation of a member for the write endpoint.
    pub fn from_member(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            status: member.status,
            date: member.start_date.map(format_wire_date),
        }
    }
}

/// Parse a wire date (`DD/MM/YYYY`, zero-padding optional) into a calendar
/// date. Unparseable input is tolerated with a warning and treated as
/// absent rather than failing the whole load.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!("Ignoring unparseable wire date: {}", raw);
            None
        }
    }
}

/// Format a calendar date in the wire format (`DD/MM/YYYY`, zero-padded).
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}
