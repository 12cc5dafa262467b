use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input ended while waiting for an answer to '{0}'")]
    EndOfInput(String),
    #[error("failure reading or writing console: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
