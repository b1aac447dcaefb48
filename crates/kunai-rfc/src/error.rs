use thiserror::Error;

use crate::rfc::ical::expand::TimezoneError;
use crate::rfc::ical::parse::ParseError;

/// RFC value parsing and resolution errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Timezone error: {0}")]
    Timezone(#[from] TimezoneError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
