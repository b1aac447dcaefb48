//! Change tracking for one conversion call.

use kunai_core::types::PrincipalRef;
use serde::{Deserialize, Serialize};

use crate::model::{Attendee, Classification, FreeBusyComponent, Organizer, Status, Transparency};
use crate::registry::PropertyIndex;

/// Owned snapshot of a value that was set on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ChangeValue {
    Text(String),
    Integer(i64),
    Attendee(Attendee),
    Organizer(Organizer),
    FreeBusy(FreeBusyComponent),
    Status(Status),
    Classification(Classification),
    Transparency(Transparency),
}

impl From<&str> for ChangeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ChangeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ChangeValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for ChangeValue {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Attendee> for ChangeValue {
    fn from(value: Attendee) -> Self {
        Self::Attendee(value)
    }
}

impl From<Organizer> for ChangeValue {
    fn from(value: Organizer) -> Self {
        Self::Organizer(value)
    }
}

impl From<FreeBusyComponent> for ChangeValue {
    fn from(value: FreeBusyComponent) -> Self {
        Self::FreeBusy(value)
    }
}

impl From<Status> for ChangeValue {
    fn from(value: Status) -> Self {
        Self::Status(value)
    }
}

impl From<Classification> for ChangeValue {
    fn from(value: Classification) -> Self {
        Self::Classification(value)
    }
}

impl From<Transparency> for ChangeValue {
    fn from(value: Transparency) -> Self {
        Self::Transparency(value)
    }
}

/// One applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub kind: PropertyIndex,
    pub old: Option<ChangeValue>,
    pub new: ChangeValue,
}

/// Append-only, insertion-ordered log of the mutations made by one
/// conversion on behalf of one principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTable {
    principal: PrincipalRef,
    entries: Vec<ChangeEntry>,
}

impl ChangeTable {
    #[must_use]
    pub const fn new(principal: PrincipalRef) -> Self {
        Self {
            principal,
            entries: Vec::new(),
        }
    }

    /// Appends one entry.
    pub fn record(&mut self, kind: PropertyIndex, old: Option<ChangeValue>, new: ChangeValue) {
        tracing::trace!(?kind, "recording change");
        self.entries.push(ChangeEntry { kind, old, new });
    }

    /// Appends an entry for a value added to a multi-valued field.
    pub fn add_value(&mut self, kind: PropertyIndex, new: impl Into<ChangeValue>) {
        self.record(kind, None, new.into());
    }

    /// Appends an entry only when `old` differs from `new`. Returns whether
    /// an entry was appended.
    pub fn changed_if_different<V>(&mut self, kind: PropertyIndex, old: Option<V>, new: V) -> bool
    where
        V: PartialEq + Into<ChangeValue>,
    {
        if old.as_ref() == Some(&new) {
            return false;
        }
        self.record(kind, old.map(Into::into), new.into());
        true
    }

    #[must_use]
    pub const fn principal(&self) -> &PrincipalRef {
        &self.principal
    }

    #[must_use]
    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    /// Entries recorded for one kind, in insertion order.
    pub fn entries_for(&self, kind: PropertyIndex) -> impl Iterator<Item = &ChangeEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<ChangeEntry> {
        self.entries
    }
}
