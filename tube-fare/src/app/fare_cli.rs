use super::{input::ConsoleInput, FareApp, FareAppError, OutputFormat, SessionOutcome};
use crate::model::{
    fare::FareConfig,
    station::{StationRow, StationZoneTable},
    trip::{TicketType, TravelerProfile},
};
use chrono::{NaiveTime, Weekday};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::{
    io::{BufRead, Write},
    path::Path,
};

/// command line fare calculator for the London Underground
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FareCliArguments {
    /// CSV file with `Station Name` and `Zone` columns
    #[arg(long, global = true, default_value_t = String::from("data/london_tube_stations.csv"))]
    pub stations_file: String,
    /// TOML file overriding the built-in fare tables and daily cap
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    #[command(subcommand)]
    pub op: FareOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FareOperation {
    /// answer questions at the console and get the total fare for the trip
    Interactive,
    /// price a trip described entirely by arguments
    Quote {
        /// starting station name, as listed in the stations file
        #[arg(long)]
        from: String,
        /// destination station name, as listed in the stations file
        #[arg(long)]
        to: String,
        /// time of travel, HH:MM on a 24-hour clock
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        /// day of the week, such as "monday" or "mon"
        #[arg(long, value_parser = parse_weekday)]
        day: Weekday,
        /// one traveler as AGE[:london][:railcard][:care-leaver]. repeat for each traveler.
        #[arg(long = "traveler", required = true, value_parser = parse_traveler)]
        travelers: Vec<TravelerProfile>,
        #[arg(long, value_enum, ignore_case = true)]
        ticket_type: TicketType,
        /// number of days of travel
        #[arg(long, default_value_t = 1)]
        days: u32,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// list the stations file ordered by zone
    Stations,
    /// print the effective fare configuration as TOML
    ShowConfig,
}

impl FareCliArguments {
    /// runs the selected operation on stdin and stdout.
    pub fn run(&self) -> Result<(), FareAppError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// runs the selected operation, reading operator answers from `input`
    /// and writing everything the operator sees to `output`.
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), FareAppError> {
        let config_file = self.config_file.as_deref().map(Path::new);
        let stations_file = Path::new(&self.stations_file);
        match &self.op {
            FareOperation::Interactive => {
                let app = FareApp::from_files(stations_file, config_file)?;
                let mut console = ConsoleInput::new(input, output);
                let outcome = app.run_interactive(&mut console)?;
                writeln!(console.writer(), "\n{outcome}")?;
                Ok(())
            }
            FareOperation::Quote {
                from,
                to,
                time,
                day,
                travelers,
                ticket_type,
                days,
                format,
            } => {
                let app = FareApp::from_files(stations_file, config_file)?;
                let outcome = app.quote(from, to, time, *day, travelers, *ticket_type, *days)?;
                write_outcome(&outcome, format, &mut output)
            }
            FareOperation::Stations => {
                let stations = StationZoneTable::from_csv(stations_file)?;
                let mut writer = csv::Writer::from_writer(output);
                for (name, zone) in stations.sorted_stations() {
                    writer.serialize(StationRow {
                        station_name: name.to_string(),
                        zone: zone.0,
                    })?;
                }
                writer.flush()?;
                Ok(())
            }
            FareOperation::ShowConfig => {
                let config = FareConfig::load(config_file)?;
                write!(output, "{}", config.to_toml()?)?;
                Ok(())
            }
        }
    }
}

fn write_outcome<W: Write>(
    outcome: &SessionOutcome,
    format: &OutputFormat,
    output: &mut W,
) -> Result<(), FareAppError> {
    match format {
        OutputFormat::Text => writeln!(output, "{outcome}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, outcome)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM, {e}"))
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("'{s}' is not a day of the week"))
}

fn parse_traveler(s: &str) -> Result<TravelerProfile, String> {
    s.parse::<TravelerProfile>()
}
