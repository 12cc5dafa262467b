use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Oyster,
    Contactless,
    Travelcard,
    Paper,
}

impl TicketType {
    /// pay-as-you-go tickets stop charging once the daily cap is reached.
    pub fn is_daily_capped(&self) -> bool {
        matches!(self, TicketType::Oyster | TicketType::Contactless)
    }
}

impl FromStr for TicketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oyster" => Ok(TicketType::Oyster),
            "contactless" => Ok(TicketType::Contactless),
            "travelcard" => Ok(TicketType::Travelcard),
            "paper" => Ok(TicketType::Paper),
            other => Err(format!("unknown ticket type '{other}'")),
        }
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketType::Oyster => write!(f, "Oyster"),
            TicketType::Contactless => write!(f, "Contactless"),
            TicketType::Travelcard => write!(f, "Travelcard"),
            TicketType::Paper => write!(f, "Paper"),
        }
    }
}
