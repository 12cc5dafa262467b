use super::input::InputError;
use crate::model::{
    fare::{FareConfigError, FareError},
    station::StationError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FareAppError {
    #[error("failure loading stations: {source}")]
    StationError {
        #[from]
        source: StationError,
    },
    #[error("failure loading fare configuration: {source}")]
    FareConfigError {
        #[from]
        source: FareConfigError,
    },
    #[error("failure calculating fare: {source}")]
    FareError {
        #[from]
        source: FareError,
    },
    #[error("failure collecting trip details: {source}")]
    InputError {
        #[from]
        source: InputError,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
