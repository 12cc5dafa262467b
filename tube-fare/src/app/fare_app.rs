use super::{
    input::{CollectedInput, InputCollector, InputSource},
    FareAppError, SessionOutcome, TravelSummary,
};
use crate::model::{
    fare::{FareConfig, FareEngine},
    station::StationZoneTable,
    trip::{TicketType, TimeOfDay, TravelerProfile, TripRequest},
};
use chrono::{NaiveTime, Weekday};
use std::path::Path;

/// the loaded reference data and fare engine for one program run.
pub struct FareApp {
    stations: StationZoneTable,
    config: FareConfig,
    engine: FareEngine,
}

impl FareApp {
    pub fn new(stations: StationZoneTable, config: FareConfig) -> Result<FareApp, FareAppError> {
        let engine = FareEngine::new(&config)?;
        Ok(FareApp {
            stations,
            config,
            engine,
        })
    }

    /// loads the station table and fare configuration from disk.
    pub fn from_files(
        stations_file: &Path,
        config_file: Option<&Path>,
    ) -> Result<FareApp, FareAppError> {
        let stations = StationZoneTable::from_csv(stations_file)?;
        let config = FareConfig::load(config_file)?;
        Self::new(stations, config)
    }

    /// asks the operator for a trip and prices it.
    pub fn run_interactive<S: InputSource>(
        &self,
        source: &mut S,
    ) -> Result<SessionOutcome, FareAppError> {
        let mut collector = InputCollector::new(source, &self.stations, &self.config.peak_windows);
        match collector.collect()? {
            CollectedInput::Travelcard => Ok(SessionOutcome::travelcard()),
            CollectedInput::Request(request) => self.price(request),
        }
    }

    /// prices a complete request. travelcard requests receive advice instead.
    pub fn price(&self, request: TripRequest) -> Result<SessionOutcome, FareAppError> {
        if request.ticket_type == TicketType::Travelcard {
            return Ok(SessionOutcome::travelcard());
        }
        let quote = self.engine.quote(&request, &self.stations)?;
        log::info!(
            "{} -> {} for {} travelers: {}",
            request.start_station,
            request.destination_station,
            request.travelers.len(),
            quote.total_pounds()
        );
        Ok(SessionOutcome::Fare(TravelSummary { request, quote }))
    }

    /// builds and prices a request from already-parsed arguments, rejecting
    /// anything the interactive questionnaire would have re-asked.
    #[allow(clippy::too_many_arguments)]
    pub fn quote(
        &self,
        from: &str,
        to: &str,
        time: &NaiveTime,
        day: Weekday,
        travelers: &[TravelerProfile],
        ticket_type: TicketType,
        duration_days: u32,
    ) -> Result<SessionOutcome, FareAppError> {
        let (from, to) = (from.trim(), to.trim());
        for station in [from, to] {
            if !self.stations.contains(station) {
                return Err(FareAppError::InvalidArgument(format!(
                    "unknown station '{station}'"
                )));
            }
        }
        if travelers.is_empty() {
            return Err(FareAppError::InvalidArgument(String::from(
                "at least one --traveler is required",
            )));
        }
        if duration_days == 0 {
            return Err(FareAppError::InvalidArgument(String::from(
                "--days must be a positive number",
            )));
        }
        let request = TripRequest {
            start_station: from.to_string(),
            destination_station: to.to_string(),
            time_of_day: TimeOfDay::classify(day, time, &self.config.peak_windows),
            travelers: travelers.to_vec(),
            ticket_type,
            duration_days,
        };
        self.price(request)
    }
}
