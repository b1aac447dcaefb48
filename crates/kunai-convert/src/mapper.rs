//! Token mappers for enumerated parameter and property values.
//!
//! Tokens are compared exactly; the wire parser has already canonicalised
//! them to upper case.

use kunai_core::types::EntityType;

use crate::error::{ConversionError, ConversionResult};
use crate::model::{Classification, FreeBusyType, Status, Transparency};

/// ## Summary
/// Maps an `FBTYPE` parameter value. An absent parameter means `BUSY`.
///
/// ## Errors
/// Returns `Malformed` for any token outside the four RFC 5545 types.
pub fn map_fb_type(token: Option<&str>) -> ConversionResult<FreeBusyType> {
    match token {
        None | Some("BUSY") => Ok(FreeBusyType::Busy),
        Some("BUSY-TENTATIVE") => Ok(FreeBusyType::BusyTentative),
        Some("BUSY-UNAVAILABLE") => Ok(FreeBusyType::BusyUnavailable),
        Some("FREE") => Ok(FreeBusyType::Free),
        Some(other) => Err(ConversionError::malformed("FBTYPE", other)),
    }
}

/// ## Summary
/// Maps a `STATUS` value for the given entity type.
///
/// ## Errors
/// Returns `Malformed` when the token is not a status of that entity type.
pub fn map_status(entity_type: EntityType, token: &str) -> ConversionResult<Status> {
    let status = match (entity_type, token) {
        (EntityType::Event, "TENTATIVE") => Status::Tentative,
        (EntityType::Event, "CONFIRMED") => Status::Confirmed,
        (EntityType::Todo, "NEEDS-ACTION") => Status::NeedsAction,
        (EntityType::Todo, "COMPLETED") => Status::Completed,
        (EntityType::Todo, "IN-PROCESS") => Status::InProcess,
        (EntityType::Event | EntityType::Todo, "CANCELLED") => Status::Cancelled,
        _ => {
            return Err(ConversionError::malformed(
                "STATUS",
                format!("{token} is not a valid {entity_type} status"),
            ));
        }
    };
    Ok(status)
}

/// Maps a `CLASS` value. Unrecognised values are treated as `PRIVATE`.
#[must_use]
pub fn map_classification(token: &str) -> Classification {
    match token {
        "PUBLIC" => Classification::Public,
        "PRIVATE" => Classification::Private,
        "CONFIDENTIAL" => Classification::Confidential,
        other => {
            tracing::debug!(class = other, "Unrecognised CLASS, treating as PRIVATE");
            Classification::Private
        }
    }
}

/// ## Summary
/// Maps a `TRANSP` value.
///
/// ## Errors
/// Returns `Malformed` for anything but `OPAQUE` or `TRANSPARENT`.
pub fn map_transparency(token: &str) -> ConversionResult<Transparency> {
    match token {
        "OPAQUE" => Ok(Transparency::Opaque),
        "TRANSPARENT" => Ok(Transparency::Transparent),
        other => Err(ConversionError::malformed("TRANSP", other)),
    }
}
