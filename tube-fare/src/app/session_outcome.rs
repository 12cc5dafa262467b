use super::TravelSummary;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const TRAVELCARD_ADVICE: &str =
    "Enjoy using your Travelcard! In the future, consider using a contactless card for better value.";

/// how a calculation ended. travelcard holders receive advice and no fare.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SessionOutcome {
    Fare(TravelSummary),
    Advisory { message: String },
}

impl SessionOutcome {
    pub fn travelcard() -> SessionOutcome {
        SessionOutcome::Advisory {
            message: String::from(TRAVELCARD_ADVICE),
        }
    }
}

impl Display for SessionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOutcome::Fare(summary) => write!(f, "{summary}"),
            SessionOutcome::Advisory { message } => write!(f, "{message}"),
        }
    }
}
