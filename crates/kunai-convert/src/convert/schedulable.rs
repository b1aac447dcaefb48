//! VEVENT and VTODO conversion.

use kunai_core::types::EntityType;
use kunai_rfc::rfc::ical::PropertyItem;
use kunai_rfc::rfc::ical::parse::{parse_integer, split_text_list};

use super::Conversion;
use super::common;
use crate::change::ChangeTable;
use crate::context::ConversionContext;
use crate::error::{ConversionError, ConversionResult};
use crate::mapper::{map_classification, map_status, map_transparency};
use crate::model::CalendarEntity;
use crate::registry::PropertyIndex;

/// ## Summary
/// Converts the properties of a VEVENT component.
///
/// Returns `Ok(None)` for an empty property list.
///
/// ## Errors
/// Returns `Malformed` for a rejected enumerated value, an out-of-range
/// integer, unusable dates, or a required value that is missing.
pub fn convert_event(
    items: &[PropertyItem],
    ctx: &ConversionContext<'_>,
) -> ConversionResult<Option<Conversion>> {
    convert_schedulable(EntityType::Event, items, ctx)
}

/// ## Summary
/// Converts the properties of a VTODO component. `DUE` takes the place of
/// `DTEND`, and `TRANSP` does not apply.
///
/// Returns `Ok(None)` for an empty property list.
///
/// ## Errors
/// As [`convert_event`], with to-do statuses in place of event statuses.
pub fn convert_todo(
    items: &[PropertyItem],
    ctx: &ConversionContext<'_>,
) -> ConversionResult<Option<Conversion>> {
    convert_schedulable(EntityType::Todo, items, ctx)
}

#[tracing::instrument(
    level = "debug",
    skip(items, ctx),
    fields(principal = %ctx.principal())
)]
fn convert_schedulable(
    entity_type: EntityType,
    items: &[PropertyItem],
    ctx: &ConversionContext<'_>,
) -> ConversionResult<Option<Conversion>> {
    if items.is_empty() {
        tracing::debug!("No properties, nothing to convert");
        return Ok(None);
    }

    let mut entity = CalendarEntity::new(entity_type);
    let mut changes = ChangeTable::new(ctx.principal().clone());

    let end = match entity_type {
        EntityType::Todo => PropertyIndex::Due,
        EntityType::Event | EntityType::FreeBusy => PropertyIndex::Dtend,
    };
    entity.dates = common::resolve_dates(items, ctx, end)?;

    for item in items {
        let kind = ctx.registry().resolve(&item.name);
        match kind {
            PropertyIndex::Attendee => common::attendee(item, ctx, &mut entity, &mut changes)?,
            PropertyIndex::Organizer => common::organizer(item, ctx, &mut entity, &mut changes)?,
            PropertyIndex::Comment => common::comment(item, &mut entity, &mut changes)?,
            // Consumed by the date resolver.
            PropertyIndex::Dtstart
            | PropertyIndex::Dtend
            | PropertyIndex::Due
            | PropertyIndex::Duration => {}
            PropertyIndex::Dtstamp => common::text(kind, item, &mut entity.dtstamp, &mut changes)?,
            PropertyIndex::Uid => common::text(kind, item, &mut entity.uid, &mut changes)?,
            PropertyIndex::Summary => common::text(kind, item, &mut entity.summary, &mut changes)?,
            PropertyIndex::Description => {
                common::text(kind, item, &mut entity.description, &mut changes)?;
            }
            PropertyIndex::Location => {
                common::text(kind, item, &mut entity.location, &mut changes)?;
            }
            PropertyIndex::Url => common::text(kind, item, &mut entity.url, &mut changes)?,
            PropertyIndex::Status => status(item, &mut entity, &mut changes)?,
            PropertyIndex::Class => classification(item, &mut entity, &mut changes)?,
            PropertyIndex::Transp if entity_type == EntityType::Event => {
                transparency(item, &mut entity, &mut changes)?;
            }
            PropertyIndex::Sequence => sequence(item, &mut entity, &mut changes)?,
            PropertyIndex::Priority => priority(item, &mut entity, &mut changes)?,
            PropertyIndex::Categories => categories(item, &mut entity, &mut changes)?,
            PropertyIndex::Unknown => common::skip_unknown(item),
            PropertyIndex::Transp
            | PropertyIndex::FreeBusy
            | PropertyIndex::Completed
            | PropertyIndex::Contact
            | PropertyIndex::Created
            | PropertyIndex::Exdate
            | PropertyIndex::Geo
            | PropertyIndex::LastModified
            | PropertyIndex::PercentComplete
            | PropertyIndex::Rdate
            | PropertyIndex::RecurrenceId
            | PropertyIndex::RelatedTo
            | PropertyIndex::RequestStatus
            | PropertyIndex::Rrule => common::skip_unhandled(item, kind),
        }
    }

    tracing::debug!(changes = changes.len(), "Converted {entity_type}");

    Ok(Some(Conversion { entity, changes }))
}

fn status(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let status = map_status(entity.entity_type, common::required_value(item)?)?;
    changes.changed_if_different(PropertyIndex::Status, entity.status, status);
    entity.status = Some(status);
    Ok(())
}

fn classification(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let class = map_classification(common::required_value(item)?);
    changes.changed_if_different(PropertyIndex::Class, entity.classification, class);
    entity.classification = Some(class);
    Ok(())
}

fn transparency(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let transp = map_transparency(common::required_value(item)?)?;
    changes.changed_if_different(PropertyIndex::Transp, entity.transparency, transp);
    entity.transparency = Some(transp);
    Ok(())
}

fn sequence(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let value = common::required_value(item)?;
    let sequence = parse_integer(value)
        .map_err(|e| ConversionError::parse("SEQUENCE", &e))
        .and_then(|n| {
            u32::try_from(n).map_err(|_e| ConversionError::malformed("SEQUENCE", "must not be negative"))
        })?;
    changes.changed_if_different(PropertyIndex::Sequence, entity.sequence, sequence);
    entity.sequence = Some(sequence);
    Ok(())
}

/// PRIORITY: 0 is undefined, 1 highest, 9 lowest.
fn priority(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    let value = common::required_value(item)?;
    let priority = parse_integer(value)
        .map_err(|e| ConversionError::parse("PRIORITY", &e))?;
    let priority = u8::try_from(priority)
        .ok()
        .filter(|p| *p <= 9)
        .ok_or_else(|| ConversionError::malformed("PRIORITY", format!("{value} is outside 0-9")))?;
    changes.changed_if_different(PropertyIndex::Priority, entity.priority, priority);
    entity.priority = Some(priority);
    Ok(())
}

fn categories(
    item: &PropertyItem,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    for category in split_text_list(common::required_value(item)?) {
        if category.is_empty() {
            continue;
        }
        changes.add_value(PropertyIndex::Categories, category.as_str());
        entity.add_category(category);
    }
    Ok(())
}
