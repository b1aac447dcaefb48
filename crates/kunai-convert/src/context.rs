//! Per-call conversion context and the collaborators it carries.

use kunai_core::types::PrincipalRef;
use kunai_rfc::rfc::ical::PropertyItem;

use crate::error::ConversionResult;
use crate::model::{Attendee, EntityDates, Organizer, Period};
use crate::registry::PropertyRegistry;

/// Computes an entity's start/end from its date properties.
pub trait DateResolver: Send + Sync {
    /// ## Summary
    /// Resolves the start/end pair for `principal`. For to-dos the caller
    /// passes `DUE` as `end`.
    ///
    /// Returns `Ok(None)` when the component carries no start.
    ///
    /// ## Errors
    /// Returns `Malformed` when the date properties are unparseable or
    /// inconsistent.
    fn resolve(
        &self,
        principal: &PrincipalRef,
        start: Option<&PropertyItem>,
        end: Option<&PropertyItem>,
        duration: Option<&PropertyItem>,
    ) -> ConversionResult<Option<EntityDates>>;
}

/// Parsers for the properties that carry a structured sub-entity.
pub trait PropertyParsers: Send + Sync {
    /// ## Errors
    /// Returns `Malformed` if the item is not a usable ATTENDEE.
    fn parse_attendee(&self, item: &PropertyItem) -> ConversionResult<Attendee>;

    /// ## Errors
    /// Returns `Malformed` if the item is not a usable ORGANIZER.
    fn parse_organizer(&self, item: &PropertyItem) -> ConversionResult<Organizer>;

    /// ## Summary
    /// Parses a FREEBUSY period list, preserving order.
    ///
    /// ## Errors
    /// Returns `Malformed` if any period is unparseable.
    fn parse_periods(
        &self,
        principal: &PrincipalRef,
        item: &PropertyItem,
    ) -> ConversionResult<Vec<Period>>;
}

/// Everything one conversion call needs besides the property list.
///
/// Nothing here is mutated by a conversion; the same context may be reused
/// for any number of calls.
#[derive(Clone, Copy)]
pub struct ConversionContext<'a> {
    principal: &'a PrincipalRef,
    registry: &'a PropertyRegistry,
    dates: &'a dyn DateResolver,
    parsers: &'a dyn PropertyParsers,
}

impl<'a> ConversionContext<'a> {
    #[must_use]
    pub const fn new(
        principal: &'a PrincipalRef,
        registry: &'a PropertyRegistry,
        dates: &'a dyn DateResolver,
        parsers: &'a dyn PropertyParsers,
    ) -> Self {
        Self {
            principal,
            registry,
            dates,
            parsers,
        }
    }

    #[must_use]
    pub const fn principal(&self) -> &'a PrincipalRef {
        self.principal
    }

    #[must_use]
    pub const fn registry(&self) -> &'a PropertyRegistry {
        self.registry
    }

    #[must_use]
    pub const fn dates(&self) -> &'a dyn DateResolver {
        self.dates
    }

    #[must_use]
    pub const fn parsers(&self) -> &'a dyn PropertyParsers {
        self.parsers
    }
}

impl std::fmt::Debug for ConversionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionContext")
            .field("principal", self.principal)
            .field("registry_len", &self.registry.len())
            .finish_non_exhaustive()
    }
}
