use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free/busy time type (RFC 5545 §3.2.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum FreeBusyType {
    #[default]
    Busy,
    BusyTentative,
    BusyUnavailable,
    Free,
}

impl FreeBusyType {
    /// Returns the FBTYPE token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Busy => "BUSY",
            Self::BusyTentative => "BUSY-TENTATIVE",
            Self::BusyUnavailable => "BUSY-UNAVAILABLE",
            Self::Free => "FREE",
        }
    }
}

impl std::fmt::Display for FreeBusyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved `[start, end)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// The periods of one FREEBUSY property, sharing one availability type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeBusyComponent {
    pub fb_type: FreeBusyType,
    pub periods: Vec<Period>,
}

impl FreeBusyComponent {
    #[must_use]
    pub const fn new(fb_type: FreeBusyType) -> Self {
        Self {
            fb_type,
            periods: Vec::new(),
        }
    }

    pub fn add_period(&mut self, period: Period) {
        self.periods.push(period);
    }
}
