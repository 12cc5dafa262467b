use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("failure reading station file '{filepath}': {source}")]
    ReadError { filepath: String, source: csv::Error },
    #[error("failure decoding station row {row}: {source}")]
    RowError { row: usize, source: csv::Error },
    #[error("station '{0}' has zone 0, zones start at 1")]
    InvalidZone(String),
    #[error("station '{name}' listed with conflicting zones {first} and {second}")]
    ConflictingZones { name: String, first: u32, second: u32 },
    #[error("station file contains no stations")]
    EmptyTable,
    #[error("unknown station '{0}'")]
    UnknownStation(String),
}
