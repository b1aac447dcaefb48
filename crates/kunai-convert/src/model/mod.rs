//! Domain entities produced by conversion.

mod attendee;
mod entity;
mod freebusy;

pub use attendee::{Attendee, Organizer};
pub use entity::{CalendarEntity, Classification, EntityDates, Status, Transparency};
pub use freebusy::{FreeBusyComponent, FreeBusyType, Period};
