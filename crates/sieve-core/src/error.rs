use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input too long: {len} characters (max {max})")]
    InputTooLarge { len: usize, max: usize },

    #[error("Potentially dangerous content detected: {0}")]
    DisallowedMarkup(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Secondary matcher error: {0}")]
    Secondary(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
