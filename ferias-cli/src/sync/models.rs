//! Domain model for the vacation roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a team member is currently working or on vacation.
///
/// The serde renames are the upstream system's fixed wire encoding:
/// `"desactived"` means working, `"actived"` means on vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacationStatus {
    #[serde(rename = "desactived")]
    Working,
    #[serde(rename = "actived")]
    OnVacation,
}

impl VacationStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Working => Self::OnVacation,
            Self::OnVacation => Self::Working,
        }
    }

    pub fn is_on_vacation(self) -> bool {
        matches!(self, Self::OnVacation)
    }

    /// Display label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::OnVacation => "on vacation",
        }
    }
}

/// One team member in the vacation roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Opaque stable identifier, unique within a sync session.
    pub id: String,
    /// Display label, not used by sync logic.
    pub name: String,
    pub status: VacationStatus,
    /// Vacation start date. Meaningful while on vacation, but kept (not
    /// cleared) when the member returns to working.
    pub start_date: Option<NaiveDate>,
}

impl Member {
    /// True when this member's synchronized fields differ from `other`.
    ///
    /// Only `status` and `start_date` participate; `name` is display-only.
    pub fn differs_from(&self, other: &Member) -> bool {
        self.status != other.status || self.start_date != other.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(status: VacationStatus, start_date: Option<NaiveDate>) -> Member {
        Member {
            id: "1".to_string(),
            name: "Ana".to_string(),
            status,
            start_date,
        }
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(VacationStatus::Working.toggled(), VacationStatus::OnVacation);
        assert_eq!(VacationStatus::OnVacation.toggled(), VacationStatus::Working);
    }

    #[test]
    fn test_differs_from_ignores_name() {
        let a = member(VacationStatus::Working, None);
        let mut b = a.clone();
        b.name = "Renamed".to_string();

        assert!(!a.differs_from(&b));
    }

    #[test]
    fn test_differs_from_sees_status_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let a = member(VacationStatus::Working, None);

        let b = member(VacationStatus::OnVacation, None);
        assert!(a.differs_from(&b));

        let c = member(VacationStatus::Working, Some(date));
        assert!(a.differs_from(&c));
    }
}
