//! iCalendar value parsers (RFC 5545 §3.3).
//!
//! Property items arrive with raw text values; these functions turn the
//! values the conversion engine cares about into typed values.

mod error;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use values::{
    parse_date, parse_date_or_datetime, parse_datetime, parse_duration, parse_integer,
    parse_period, parse_period_list, split_text_list,
};
