//! Semantic index registry: wire property name <-> [`PropertyIndex`].

use std::collections::HashMap;

use kunai_rfc::rfc::ical::core::names;
use serde::{Deserialize, Serialize};

/// Closed classification of the property names the converters understand.
///
/// Names that resolve to nothing map to [`PropertyIndex::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PropertyIndex {
    Attendee,
    Categories,
    Class,
    Comment,
    Completed,
    Contact,
    Created,
    Description,
    Dtend,
    Dtstamp,
    Dtstart,
    Due,
    Duration,
    Exdate,
    #[serde(rename = "FREEBUSY")]
    FreeBusy,
    Geo,
    LastModified,
    Location,
    Organizer,
    PercentComplete,
    Priority,
    Rdate,
    RecurrenceId,
    RelatedTo,
    RequestStatus,
    Rrule,
    Sequence,
    Status,
    Summary,
    Transp,
    Uid,
    Url,
    Unknown,
}

/// RFC 5545 property names and their index.
const STANDARD_NAMES: &[(&str, PropertyIndex)] = &[
    (names::ATTENDEE, PropertyIndex::Attendee),
    (names::CATEGORIES, PropertyIndex::Categories),
    (names::CLASS, PropertyIndex::Class),
    (names::COMMENT, PropertyIndex::Comment),
    (names::COMPLETED, PropertyIndex::Completed),
    (names::CONTACT, PropertyIndex::Contact),
    (names::CREATED, PropertyIndex::Created),
    (names::DESCRIPTION, PropertyIndex::Description),
    (names::DTEND, PropertyIndex::Dtend),
    (names::DTSTAMP, PropertyIndex::Dtstamp),
    (names::DTSTART, PropertyIndex::Dtstart),
    (names::DUE, PropertyIndex::Due),
    (names::DURATION, PropertyIndex::Duration),
    (names::EXDATE, PropertyIndex::Exdate),
    (names::FREEBUSY, PropertyIndex::FreeBusy),
    (names::GEO, PropertyIndex::Geo),
    (names::LAST_MODIFIED, PropertyIndex::LastModified),
    (names::LOCATION, PropertyIndex::Location),
    (names::ORGANIZER, PropertyIndex::Organizer),
    (names::PERCENT_COMPLETE, PropertyIndex::PercentComplete),
    (names::PRIORITY, PropertyIndex::Priority),
    (names::RDATE, PropertyIndex::Rdate),
    (names::RECURRENCE_ID, PropertyIndex::RecurrenceId),
    (names::RELATED_TO, PropertyIndex::RelatedTo),
    (names::REQUEST_STATUS, PropertyIndex::RequestStatus),
    (names::RRULE, PropertyIndex::Rrule),
    (names::SEQUENCE, PropertyIndex::Sequence),
    (names::STATUS, PropertyIndex::Status),
    (names::SUMMARY, PropertyIndex::Summary),
    (names::TRANSP, PropertyIndex::Transp),
    (names::UID, PropertyIndex::Uid),
    (names::URL, PropertyIndex::Url),
];

/// Bidirectional, immutable name table.
///
/// Built once and shared by reference with every conversion; it is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    by_name: HashMap<String, PropertyIndex>,
    by_index: HashMap<PropertyIndex, String>,
}

impl PropertyRegistry {
    /// An empty registry: every name resolves to `Unknown`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
            by_index: HashMap::new(),
        }
    }

    /// The RFC 5545 property table.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_NAMES
            .iter()
            .fold(Self::empty(), |registry, (name, index)| {
                registry.with_name(*name, *index)
            })
    }

    /// Registers `name` for `index`, returning the registry.
    ///
    /// The first name registered for an index is its canonical name for
    /// [`Self::name_of`]; later names act as aliases. Registering
    /// `Unknown` is a no-op.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>, index: PropertyIndex) -> Self {
        if index == PropertyIndex::Unknown {
            return self;
        }
        let name = name.into();
        self.by_index.entry(index).or_insert_with(|| name.clone());
        self.by_name.insert(name, index);
        self
    }

    /// Resolves a wire name. Names are compared exactly as given.
    #[must_use]
    pub fn resolve(&self, name: &str) -> PropertyIndex {
        self.by_name
            .get(name)
            .copied()
            .unwrap_or(PropertyIndex::Unknown)
    }

    /// Returns the canonical wire name of an index.
    #[must_use]
    pub fn name_of(&self, index: PropertyIndex) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
