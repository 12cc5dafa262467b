#[derive(thiserror::Error, Debug)]
pub enum FareConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid fare configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failure encoding fare configuration: {0}")]
    EncodeError(String),
}
