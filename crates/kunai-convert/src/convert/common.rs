//! Handlers shared by every converter.

use kunai_rfc::rfc::ical::PropertyItem;

use crate::change::ChangeTable;
use crate::context::ConversionContext;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{CalendarEntity, EntityDates};
use crate::registry::PropertyIndex;

/// The value of a property that cannot be meaningfully empty.
pub(super) fn required_value(item: &PropertyItem) -> ConversionResult<&str> {
    item.value()
        .ok_or_else(|| ConversionError::malformed(&item.name, "missing value"))
}

/// Looks up the date properties through the registry and hands them to the
/// date resolver. `end` is DTEND for events and free/busy, DUE for to-dos.
pub(super) fn resolve_dates(
    items: &[PropertyItem],
    ctx: &ConversionContext<'_>,
    end: PropertyIndex,
) -> ConversionResult<Option<EntityDates>> {
    let find = |kind: PropertyIndex| {
        items
            .iter()
            .find(|item| ctx.registry().resolve(&item.name) == kind)
    };

    ctx.dates().resolve(
        ctx.principal(),
        find(PropertyIndex::Dtstart),
        find(end),
        find(PropertyIndex::Duration),
    )
}

pub(super) fn attendee(
    item: &PropertyItem,
    ctx: &ConversionContext<'_>,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    required_value(item)?;
    let attendee = ctx.parsers().parse_attendee(item)?;
    changes.add_value(PropertyIndex::Attendee, attendee.clone());
    entity.add_attendee(attendee);
    Ok(())
}

pub(super) fn organizer(
    item: &PropertyItem,
    ctx: &ConversionContext<'_>,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    required_value(item)?;
    let organizer = ctx.parsers().parse_organizer(item)?;
    changes.record(
        PropertyIndex::Organizer,
        entity.organizer.take().map(Into::into),
        organizer.clone().into(),
    );
    entity.organizer = Some(organizer);
    Ok(())
}

/// COMMENT. A `LANGUAGE` parameter is accepted but not modelled.
pub(super) fn comment(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let value = required_value(item)?;
    entity.add_comment(value);
    changes.add_value(PropertyIndex::Comment, value);
    Ok(())
}

/// Sets a single-valued text field, recording only a real change.
pub(super) fn text(
    kind: PropertyIndex,
    item: &PropertyItem,
    field: &mut Option<String>,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let value = required_value(item)?;
    changes.changed_if_different(kind, field.as_deref(), value);
    *field = Some(value.to_string());
    Ok(())
}

pub(super) fn skip_unknown(item: &PropertyItem) {
    tracing::debug!(property = %item.name, "Skipping unrecognised property");
}

pub(super) fn skip_unhandled(item: &PropertyItem, kind: PropertyIndex) {
    tracing::debug!(property = %item.name, ?kind, "Property not applicable to this entity, skipping");
}
