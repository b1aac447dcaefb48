use thiserror::Error;

/// Errors shared by every kunai crate
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid principal reference: {0:?}")]
    InvalidPrincipal(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
