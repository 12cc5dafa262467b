mod concession;
mod fare_config;
mod fare_config_error;
mod fare_engine;
mod fare_error;
mod fare_quote;
mod fare_table;

pub use concession::Concession;
pub use fare_config::FareConfig;
pub use fare_config_error::FareConfigError;
pub use fare_engine::FareEngine;
pub use fare_error::FareError;
pub use fare_quote::{FareQuote, TravelerCharge};
pub use fare_table::FareTable;
