use thiserror::Error;

/// Custom error types for seximal-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid seximal numeral: {0}")]
    InvalidNumeral(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Date precedes the seximal epoch: {0}")]
    PreEpochDate(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for seximal-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
