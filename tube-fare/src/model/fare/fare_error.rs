use crate::model::station::StationError;
use thiserror::Error;

/// failures of the fare engine. these indicate a caller handing the engine
/// a request it should have rejected during input collection.
#[derive(Error, Debug)]
pub enum FareError {
    #[error("failure resolving station zone: {source}")]
    StationLookupError {
        #[from]
        source: StationError,
    },
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),
}
