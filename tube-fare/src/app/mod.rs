mod fare_app;
mod fare_app_error;
mod fare_cli;
pub mod input;
mod output_format;
mod session_outcome;
mod travel_summary;

pub use fare_app::FareApp;
pub use fare_app_error::FareAppError;
pub use fare_cli::{FareCliArguments, FareOperation};
pub use output_format::OutputFormat;
pub use session_outcome::{SessionOutcome, TRAVELCARD_ADVICE};
pub use travel_summary::TravelSummary;
