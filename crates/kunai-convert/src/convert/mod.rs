//! Entity converters.
//!
//! Every converter has the same shape: an empty property list is "nothing
//! to convert", dates come from the injected [`DateResolver`], and each
//! property is dispatched once, in input order, on its resolved
//! [`PropertyIndex`].
//!
//! [`DateResolver`]: crate::context::DateResolver
//! [`PropertyIndex`]: crate::registry::PropertyIndex

mod common;
mod freebusy;
mod schedulable;

use kunai_rfc::rfc::ical::{Component, ComponentKind};

use crate::change::ChangeTable;
use crate::context::ConversionContext;
use crate::error::ConversionResult;
use crate::model::CalendarEntity;

pub use freebusy::convert_freebusy;
pub use schedulable::{convert_event, convert_todo};

/// A converted entity together with the changes that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub entity: CalendarEntity,
    pub changes: ChangeTable,
}

impl Conversion {
    #[must_use]
    pub fn into_parts(self) -> (CalendarEntity, ChangeTable) {
        (self.entity, self.changes)
    }
}

/// ## Summary
/// Converts a parsed component, choosing the converter from its kind.
///
/// Components that do not map to an entity (VCALENDAR, VTIMEZONE, VALARM,
/// VJOURNAL, unknown) are "nothing to convert".
///
/// ## Errors
/// Propagates the selected converter's error.
pub fn convert_component(
    component: &Component,
    ctx: &ConversionContext<'_>,
) -> ConversionResult<Option<Conversion>> {
    if !component.children.is_empty() {
        // Sub-components are converted by their own calls.
        tracing::debug!(
            component = %component.name,
            children = component.children.len(),
            "Skipping nested components"
        );
    }

    match component.kind {
        ComponentKind::FreeBusy => convert_freebusy(&component.properties, ctx),
        ComponentKind::Event => convert_event(&component.properties, ctx),
        ComponentKind::Todo => convert_todo(&component.properties, ctx),
        ComponentKind::Calendar
        | ComponentKind::Journal
        | ComponentKind::Timezone
        | ComponentKind::Alarm
        | ComponentKind::Unknown => {
            tracing::debug!(component = %component.name, "Component does not convert to an entity");
            Ok(None)
        }
    }
}
