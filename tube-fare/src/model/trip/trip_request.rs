use super::{TicketType, TimeOfDay, TravelerProfile};
use crate::model::fare::FareError;
use serde::{Deserialize, Serialize};

/// a validated request for a fare, built once per calculation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripRequest {
    pub start_station: String,
    pub destination_station: String,
    pub time_of_day: TimeOfDay,
    pub travelers: Vec<TravelerProfile>,
    pub ticket_type: TicketType,
    pub duration_days: u32,
}

impl TripRequest {
    /// checks the invariants that do not depend on the station table.
    pub fn validate(&self) -> Result<(), FareError> {
        if self.travelers.is_empty() {
            return Err(FareError::InvalidRequest(String::from(
                "a trip needs at least one traveler",
            )));
        }
        if self.duration_days == 0 {
            return Err(FareError::InvalidRequest(String::from(
                "trip duration must be at least one day",
            )));
        }
        Ok(())
    }
}
