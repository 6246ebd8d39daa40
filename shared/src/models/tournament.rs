//! Tournament Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tournament summary from the public catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    /// "regular" or "relampago"; drives which price table applies.
    #[serde(rename = "type", default = "default_type")]
    pub tournament_type: String,
    #[serde(default)]
    pub registration_open: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

fn default_type() -> String {
    "regular".to_string()
}

/// Lifecycle status derived from the end date and registration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentStatus {
    RegistrationOpen,
    RegistrationClosed,
    Finished,
}

impl Tournament {
    /// Status as of `today`. A tournament whose end date has passed is
    /// finished regardless of the registration flag.
    pub fn status(&self, today: NaiveDate) -> TournamentStatus {
        if let Some(end) = self.end_date
            && end < today
        {
            return TournamentStatus::Finished;
        }
        if self.registration_open {
            TournamentStatus::RegistrationOpen
        } else {
            TournamentStatus::RegistrationClosed
        }
    }
}

/// First tournament currently accepting registrations, in catalog order.
pub fn active_tournament(tournaments: &[Tournament]) -> Option<&Tournament> {
    tournaments.iter().find(|t| t.registration_open)
}
