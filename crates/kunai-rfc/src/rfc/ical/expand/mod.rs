//! Resolution of iCalendar date-times to absolute instants.

mod timezone;

pub use timezone::{
    TimeZoneResolver, TimezoneError, UtcValue, convert_to_utc, datetime_to_utc, value_to_utc,
};
