use chrono::{DateTime, Utc};
use kunai_core::types::EntityType;
use serde::{Deserialize, Serialize};

use super::{Attendee, FreeBusyComponent, Organizer};

/// Start and end of an entity, resolved to UTC by the date resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// DTSTART was a DATE rather than a DATE-TIME.
    pub all_day: bool,
}

/// STATUS values (RFC 5545 §3.8.1.11). Which values are valid depends on
/// the entity type; see [`crate::mapper::map_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Status {
    Tentative,
    Confirmed,
    Cancelled,
    NeedsAction,
    Completed,
    InProcess,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tentative => "TENTATIVE",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::NeedsAction => "NEEDS-ACTION",
            Self::Completed => "COMPLETED",
            Self::InProcess => "IN-PROCESS",
        }
    }
}

/// CLASS values (RFC 5545 §3.8.1.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Classification {
    Public,
    Private,
    Confidential,
}

/// TRANSP values (RFC 5545 §3.8.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Transparency {
    Opaque,
    Transparent,
}

/// A calendar entity as built by one conversion call.
///
/// Free/busy entities only ever populate the common fields (participants,
/// comments, UID, DTSTAMP, dates) and `freebusy`; events and to-dos use the
/// descriptive fields as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntity {
    pub entity_type: EntityType,
    pub uid: Option<String>,
    /// DTSTAMP as written on the wire; not reinterpreted.
    pub dtstamp: Option<String>,
    pub dates: Option<EntityDates>,
    pub attendees: Vec<Attendee>,
    pub organizer: Option<Organizer>,
    pub comments: Vec<String>,
    pub freebusy: Vec<FreeBusyComponent>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub status: Option<Status>,
    pub classification: Option<Classification>,
    pub transparency: Option<Transparency>,
    pub sequence: Option<u32>,
    pub priority: Option<u8>,
    pub categories: Vec<String>,
}

impl CalendarEntity {
    #[must_use]
    pub const fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            uid: None,
            dtstamp: None,
            dates: None,
            attendees: Vec::new(),
            organizer: None,
            comments: Vec::new(),
            freebusy: Vec::new(),
            summary: None,
            description: None,
            location: None,
            url: None,
            status: None,
            classification: None,
            transparency: None,
            sequence: None,
            priority: None,
            categories: Vec::new(),
        }
    }

    pub fn add_attendee(&mut self, attendee: Attendee) {
        self.attendees.push(attendee);
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn add_freebusy(&mut self, component: FreeBusyComponent) {
        self.freebusy.push(component);
    }

    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.push(category.into());
    }
}
