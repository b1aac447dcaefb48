//! Timezone resolution and UTC conversion for iCalendar date-times.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use chrono::{LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::RfcResult;
use crate::rfc::ical::core::{DateOrDateTime, DateTime, DateTimeForm};
use crate::rfc::ical::parse::parse_date_or_datetime;

/// Error during timezone conversion.
#[derive(Debug, thiserror::Error)]
pub enum TimezoneError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent time during DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

/// Resolver for timezone identifiers.
///
/// Caches resolved timezones; one resolver lives for one conversion call.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    /// Cache of resolved IANA timezones by TZID.
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Common CalDAV/iCalendar TZIDs (Windows names, vendor prefixes, IANA
    /// aliases) are mapped to their canonical IANA equivalents first.
    ///
    /// ## Errors
    ///
    /// Returns `TimezoneError::UnknownTimezone` if the TZID cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, TimezoneError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);
        if normalized != tzid {
            tracing::trace!(tzid, %normalized, "Normalized TZID");
        }

        let tz = Tz::from_str(&normalized)
            .map_err(|_e| TimezoneError::UnknownTimezone(tzid.to_string()))?;

        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

/// Normalizes common CalDAV/iCalendar timezone identifiers to IANA names.
///
/// Many calendar clients use non-standard TZID values (Windows zone names,
/// `/mozilla.org/` prefixes) that need to be mapped to IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    let iana_parser = IanaParserExtended::new();

    if let Some(tz) = WindowsParser::new().parse(stripped, None) {
        // Map the BCP-47 zone back to its canonical IANA name
        if let Some(entry) = iana_parser.iter().find(|entry| entry.time_zone == tz) {
            return entry.canonical.to_string();
        }
    }

    // Canonicalize IANA aliases (Europe/Kiev -> Europe/Kyiv)
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}

/// ## Summary
/// Converts a local datetime to UTC using the specified timezone.
///
/// A time inside a DST fold resolves to its first occurrence (RFC 5545 §3.3.5).
///
/// ## Errors
///
/// Returns an error if the timezone cannot be resolved or the local time
/// falls into a DST gap.
pub fn convert_to_utc(
    local_time: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<chrono::DateTime<Utc>, TimezoneError> {
    let tz = resolver.resolve(tzid)?;
    localize(local_time, tz, tzid)
}

/// ## Summary
/// Converts an iCalendar DATE-TIME to a UTC instant.
///
/// UTC values are taken as-is, zoned values go through the TZID, and
/// floating values are interpreted in `floating_tz`.
///
/// ## Errors
///
/// Returns an error if the TZID cannot be resolved or the local time falls
/// into a DST gap.
pub fn datetime_to_utc(
    dt: &DateTime,
    floating_tz: Tz,
    resolver: &mut TimeZoneResolver,
) -> Result<chrono::DateTime<Utc>, TimezoneError> {
    match &dt.form {
        DateTimeForm::Utc => Ok(chrono::DateTime::from_naive_utc_and_offset(dt.local, Utc)),
        DateTimeForm::Zoned { tzid } => convert_to_utc(dt.local, tzid, resolver),
        DateTimeForm::Floating => localize(dt.local, floating_tz, floating_tz.name()),
    }
}

/// A DATE or DATE-TIME value pinned to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcValue {
    pub instant: chrono::DateTime<Utc>,
    /// Whether the value was a DATE (all-day) rather than a DATE-TIME.
    pub is_date: bool,
}

/// ## Summary
/// Parses a DATE or DATE-TIME property value and converts it to UTC.
///
/// A DATE is taken as local midnight in `floating_tz`, as is a floating
/// DATE-TIME.
///
/// ## Errors
///
/// Returns `RfcError::ParseError` for an unparseable value and
/// `RfcError::Timezone` when the TZID is unknown or the time falls into a
/// DST gap.
pub fn value_to_utc(
    value: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
    floating_tz: Tz,
    resolver: &mut TimeZoneResolver,
) -> RfcResult<UtcValue> {
    let utc = match parse_date_or_datetime(value, value_type, tzid)? {
        DateOrDateTime::Date(date) => UtcValue {
            instant: localize(date.and_time(NaiveTime::MIN), floating_tz, floating_tz.name())?,
            is_date: true,
        },
        DateOrDateTime::DateTime(dt) => UtcValue {
            instant: datetime_to_utc(&dt, floating_tz, resolver)?,
            is_date: false,
        },
    };
    Ok(utc)
}

fn localize(
    local_time: NaiveDateTime,
    tz: Tz,
    tzid: &str,
) -> Result<chrono::DateTime<Utc>, TimezoneError> {
    match tz.from_local_datetime(&local_time) {
        LocalResult::None => Err(TimezoneError::NonExistentTime(format!(
            "{local_time} in timezone {tzid}"
        ))),
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
    }
}
