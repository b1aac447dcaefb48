//! iCalendar core models (RFC 5545).
//!
//! These types describe a component as the conversion engine receives it:
//! - Property items carry the raw value and parameters exactly as parsed
//! - Value types (DATE-TIME, DURATION, PERIOD) are produced on demand by
//!   the parsers in `parse`, not stored on the item

mod component;
mod datetime;
mod duration;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind};
pub use datetime::{DateOrDateTime, DateTime, DateTimeForm};
pub use duration::Duration;
pub use parameter::Parameter;
pub use property::{PropertyItem, names};
pub use value::Period;
