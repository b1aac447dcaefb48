//! Value type parsers for iCalendar (RFC 5545 §3.3).

use chrono::{NaiveDate, NaiveTime};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{DateOrDateTime, DateTime, DateTimeForm, Duration, Period};

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit calendar date.
pub fn parse_date(s: &str) -> ParseResult<NaiveDate> {
    let err = || ParseError::new(ParseErrorKind::InvalidDate).with_context(s);

    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let year = s[0..4].parse::<i32>().map_err(|_e| err())?;
    let month = s[4..6].parse::<u32>().map_err(|_e| err())?;
    let day = s[6..8].parse::<u32>().map_err(|_e| err())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Parses a TIME value (RFC 5545 §3.3.12), returning the time and whether
/// it carried the UTC designator.
///
/// Format: HHMMSS[Z] (e.g., "133000", "133000Z")
fn parse_time(s: &str) -> ParseResult<(NaiveTime, bool)> {
    let err = || ParseError::new(ParseErrorKind::InvalidTime).with_context(s);

    let (time_str, is_utc) = match s.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };

    if time_str.len() != 6 || !time_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let hour = time_str[0..2].parse::<u32>().map_err(|_e| err())?;
    let minute = time_str[2..4].parse::<u32>().map_err(|_e| err())?;
    // A leap second (60) is clamped to 59; chrono has no second 60.
    let second = time_str[4..6].parse::<u32>().map_err(|_e| err())?.min(59);

    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(err)?;
    Ok((time, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z")
///
/// The TZID comes from the property parameter, not the value itself; it is
/// ignored for UTC values.
///
/// ## Errors
/// Returns an error if the string is not a valid date-time.
pub fn parse_datetime(s: &str, tzid: Option<&str>) -> ParseResult<DateTime> {
    let (date_str, time_str) = s
        .split_once('T')
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidDateTime).with_context(s))?;

    let date = parse_date(date_str)?;
    let (time, is_utc) = parse_time(time_str)?;

    let form = if is_utc {
        DateTimeForm::Utc
    } else if let Some(tz) = tzid {
        DateTimeForm::Zoned {
            tzid: tz.to_string(),
        }
    } else {
        DateTimeForm::Floating
    };

    Ok(DateTime {
        local: date.and_time(time),
        form,
    })
}

/// Parses the value of a DTSTART/DTEND/DUE style property.
///
/// `VALUE=DATE` selects a DATE; `VALUE=DATE-TIME` or no VALUE parameter
/// selects a DATE-TIME, except that a bare 8-digit value without a VALUE
/// parameter is accepted as a DATE.
///
/// ## Errors
/// Returns an error if the value does not match the selected type or the
/// VALUE parameter names another type.
pub fn parse_date_or_datetime(
    s: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
) -> ParseResult<DateOrDateTime> {
    match value_type {
        Some("DATE") => parse_date(s).map(DateOrDateTime::Date),
        Some("DATE-TIME") => parse_datetime(s, tzid).map(DateOrDateTime::DateTime),
        None if !s.contains('T') => parse_date(s).map(DateOrDateTime::Date),
        None => parse_datetime(s, tzid).map(DateOrDateTime::DateTime),
        Some(other) => {
            Err(ParseError::new(ParseErrorKind::InvalidValueType).with_context(other))
        }
    }
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: [+|-]P[nW] or [+|-]P[nD][T[nH][nM][nS]]
///
/// ## Errors
/// Returns an error if the string is not a valid duration.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let err = || ParseError::new(ParseErrorKind::InvalidDuration).with_context(s);

    let (negative, rest) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    let rest = rest.strip_prefix('P').ok_or_else(err)?;
    if rest.is_empty() {
        return Err(err());
    }

    let mut dur = Duration {
        negative,
        ..Duration::zero()
    };

    if let Some(weeks) = rest.strip_suffix('W') {
        dur.weeks = parse_duration_number(weeks).ok_or_else(err)?;
        return Ok(dur);
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((_, "")) => return Err(err()),
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    if !date_part.is_empty() {
        let days = date_part.strip_suffix('D').ok_or_else(err)?;
        dur.days = parse_duration_number(days).ok_or_else(err)?;
    }

    if let Some(time) = time_part {
        apply_time_components(time, &mut dur).ok_or_else(err)?;
    }

    Ok(dur)
}

fn parse_duration_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Applies the H, M and S components of the time part of a duration.
/// Each designator may appear at most once and only in that order.
fn apply_time_components(time: &str, dur: &mut Duration) -> Option<()> {
    let mut rest = time;
    let mut last_rank = 0;

    while !rest.is_empty() {
        let pos = rest.find(|c: char| !c.is_ascii_digit())?;
        let value = parse_duration_number(&rest[..pos])?;
        let rank = match rest[pos..].chars().next()? {
            'H' => 1,
            'M' => 2,
            'S' => 3,
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        last_rank = rank;

        match rank {
            1 => dur.hours = value,
            2 => dur.minutes = value,
            _ => dur.seconds = value,
        }
        rest = &rest[pos + 1..];
    }

    Some(())
}

/// Parses a PERIOD value (RFC 5545 §3.3.9).
///
/// Format: start"/"end or start"/"duration
///
/// ## Errors
/// Returns an error if the string is not a valid period.
pub fn parse_period(s: &str, tzid: Option<&str>) -> ParseResult<Period> {
    let (start_str, end_str) = s
        .split_once('/')
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidPeriod).with_context(s))?;

    let start = parse_datetime(start_str, tzid)?;

    if end_str.starts_with('P') || end_str.starts_with('+') || end_str.starts_with('-') {
        let duration = parse_duration(end_str)?;
        Ok(Period::Duration { start, duration })
    } else {
        let end = parse_datetime(end_str, tzid)?;
        Ok(Period::Explicit { start, end })
    }
}

/// Parses a comma-separated list of PERIOD values, as carried by FREEBUSY
/// and RDATE;VALUE=PERIOD. Order is preserved.
///
/// ## Errors
/// Returns an error if the list is empty or any element is not a valid period.
pub fn parse_period_list(s: &str, tzid: Option<&str>) -> ParseResult<Vec<Period>> {
    if s.is_empty() {
        return Err(ParseError::new(ParseErrorKind::InvalidPeriod).with_context("empty period list"));
    }
    s.split(',').map(|p| parse_period(p, tzid)).collect()
}

/// Parses an INTEGER value (RFC 5545 §3.3.8).
///
/// ## Errors
/// Returns an error if the string is not a signed decimal integer.
pub fn parse_integer(s: &str) -> ParseResult<i32> {
    s.parse::<i32>()
        .map_err(|_e| ParseError::new(ParseErrorKind::InvalidInteger).with_context(s))
}

/// Splits a multi-valued TEXT property (e.g. CATEGORIES) on unescaped
/// commas. An escaped comma (`\,`) becomes part of the element; other
/// escapes are kept as written.
#[must_use]
pub fn split_text_list(s: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(',') => current.push(','),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);
    items
}
