use serde::{Deserialize, Serialize};

/// An ATTENDEE (RFC 5545 §3.8.4.1): calendar address plus the parameters
/// the engine models. Unmodelled parameters are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attendee {
    /// CAL-ADDRESS value, usually a `mailto:` URI.
    pub cal_address: String,
    pub cn: Option<String>,
    pub cutype: Option<String>,
    pub role: Option<String>,
    pub partstat: Option<String>,
    pub rsvp: Option<bool>,
    pub sent_by: Option<String>,
    pub dir: Option<String>,
    pub language: Option<String>,
}

impl Attendee {
    #[must_use]
    pub fn new(cal_address: impl Into<String>) -> Self {
        Self {
            cal_address: cal_address.into(),
            ..Self::default()
        }
    }
}

/// The ORGANIZER (RFC 5545 §3.8.4.3).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organizer {
    /// CAL-ADDRESS value, usually a `mailto:` URI.
    pub cal_address: String,
    pub cn: Option<String>,
    pub sent_by: Option<String>,
    pub dir: Option<String>,
    pub language: Option<String>,
}

impl Organizer {
    #[must_use]
    pub fn new(cal_address: impl Into<String>) -> Self {
        Self {
            cal_address: cal_address.into(),
            ..Self::default()
        }
    }
}
