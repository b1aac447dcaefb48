use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Reference to the principal a conversion acts on behalf of, e.g.
/// `/principals/users/alice`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalRef(String);

impl PrincipalRef {
    /// ## Summary
    /// Wraps a principal href.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidPrincipal` if the reference is blank.
    pub fn new(href: impl Into<String>) -> CoreResult<Self> {
        let href = href.into();
        if href.trim().is_empty() {
            return Err(CoreError::InvalidPrincipal(href));
        }
        Ok(Self(href))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrincipalRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of calendar entity a component converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Event,
    Todo,
    FreeBusy,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Todo => "todo",
            Self::FreeBusy => "freebusy",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
