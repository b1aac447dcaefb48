//! iCalendar RFC 5545 value model.
//!
//! - `core`: property items, parameters, components and value types
//! - `parse`: parsers for DATE, DATE-TIME, DURATION and PERIOD values
//! - `expand`: timezone resolution to UTC
//!
//! Turning raw iCalendar text into property items is the job of the wire
//! parser upstream of this crate.

pub mod core;
pub mod expand;
pub mod parse;

pub use core::{Component, ComponentKind, Parameter, PropertyItem};
pub use parse::{ParseError, ParseErrorKind, ParseResult};
