use super::{Concession, FareConfig, FareConfigError, FareError, FareQuote, FareTable, TravelerCharge};
use crate::model::{
    station::StationZoneTable,
    trip::{TimeOfDay, TripRequest},
};
use rust_decimal::Decimal;

/// prices trip requests. holds no state beyond its fare tables, so the same
/// request and station table always produce the same quote.
#[derive(Clone, Debug)]
pub struct FareEngine {
    peak: FareTable,
    off_peak: FareTable,
    daily_cap: Decimal,
}

impl FareEngine {
    pub fn new(config: &FareConfig) -> Result<FareEngine, FareConfigError> {
        config.validate()?;
        Ok(FareEngine {
            peak: config.peak_table()?,
            off_peak: config.off_peak_table()?,
            daily_cap: config.daily_cap,
        })
    }

    pub fn fare_table(&self, time_of_day: TimeOfDay) -> &FareTable {
        match time_of_day {
            TimeOfDay::Peak => &self.peak,
            TimeOfDay::OffPeak => &self.off_peak,
        }
    }

    /// prices a request.
    ///
    /// # Arguments
    /// * `request` - trip to price. travelcard requests are not priced by callers
    ///   and would be charged like paper tickets here.
    /// * `stations` - station reference table
    ///
    /// # Result
    /// the quote, or an error if a station is missing from the table or the
    /// request breaks its invariants
    pub fn quote(
        &self,
        request: &TripRequest,
        stations: &StationZoneTable,
    ) -> Result<FareQuote, FareError> {
        request.validate()?;
        let start_zone = stations.zone_of(&request.start_station)?;
        let destination_zone = stations.zone_of(&request.destination_station)?;
        let zones_crossed = start_zone.span(&destination_zone);
        let base_fare = self.fare_table(request.time_of_day).base_fare(zones_crossed);
        log::debug!(
            "zones {start_zone} -> {destination_zone} crosses {zones_crossed} zones, {} base fare {base_fare}",
            request.time_of_day
        );

        let charges = request
            .travelers
            .iter()
            .map(|traveler| {
                let concession = Concession::for_traveler(traveler);
                TravelerCharge {
                    age: traveler.age,
                    concession,
                    amount: concession.charge(base_fare),
                }
            })
            .collect::<Vec<_>>();
        let subtotal: Decimal = charges.iter().map(|c| c.amount).sum();

        let cap = request
            .ticket_type
            .is_daily_capped()
            .then(|| self.daily_cap * Decimal::from(request.duration_days));
        let total = match cap {
            Some(ceiling) if subtotal > ceiling => {
                log::debug!("daily cap of {ceiling} applies to subtotal {subtotal}");
                ceiling
            }
            _ => subtotal,
        };

        Ok(FareQuote {
            start_zone,
            destination_zone,
            zones_crossed,
            base_fare,
            charges,
            subtotal,
            cap,
            total,
        })
    }

    /// total fare for a request.
    pub fn total_fare(
        &self,
        request: &TripRequest,
        stations: &StationZoneTable,
    ) -> Result<Decimal, FareError> {
        Ok(self.quote(request, stations)?.total)
    }
}
