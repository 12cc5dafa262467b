use crate::model::{fare::FareQuote, trip::TripRequest};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a priced trip, displayed as the summary block shown to the operator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TravelSummary {
    pub request: TripRequest,
    pub quote: FareQuote,
}

impl Display for TravelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Travel Summary:")?;
        writeln!(f, "From: {}", self.request.start_station)?;
        writeln!(f, "To: {}", self.request.destination_station)?;
        writeln!(f, "Time of Day: {}", self.request.time_of_day)?;
        writeln!(f, "Number of Travelers: {}", self.request.travelers.len())?;
        writeln!(f, "Ticket Type: {}", self.request.ticket_type)?;
        writeln!(f, "Duration: {} days", self.request.duration_days)?;
        write!(f, "Total Fare: {}", self.quote.total_pounds())
    }
}
