use kunai_core::error::CoreError;
use kunai_rfc::error::RfcError;
use kunai_rfc::rfc::ical::parse::ParseError;
use thiserror::Error;

/// Conversion errors.
///
/// An unrecognised property *name* is never an error; it is skipped.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Input violates an enumeration or structural expectation.
    #[error("Malformed {context}: {detail}")]
    Malformed { context: String, detail: String },

    /// Unexpected fault from a collaborator; the cause is kept for diagnostics.
    #[error("Internal conversion failure: {cause}")]
    Internal {
        #[source]
        cause: anyhow::Error,
    },
}

impl ConversionError {
    #[must_use]
    pub fn malformed(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn internal(cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            cause: cause.into(),
        }
    }

    /// Wraps a value parse failure for the named property.
    #[must_use]
    pub fn parse(context: impl Into<String>, err: &ParseError) -> Self {
        Self::malformed(context, err.to_string())
    }

    /// Wraps a value resolution failure for the named property.
    #[must_use]
    pub fn rfc(context: impl Into<String>, err: &RfcError) -> Self {
        Self::malformed(context, err.to_string())
    }

    /// Returns whether this error is due to bad input rather than a fault.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

impl From<CoreError> for ConversionError {
    fn from(err: CoreError) -> Self {
        Self::internal(err)
    }
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
