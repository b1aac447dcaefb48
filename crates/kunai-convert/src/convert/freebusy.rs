use kunai_core::types::EntityType;
use kunai_rfc::rfc::ical::PropertyItem;

use super::Conversion;
use super::common;
use crate::change::ChangeTable;
use crate::context::ConversionContext;
use crate::error::ConversionResult;
use crate::mapper::map_fb_type;
use crate::model::{CalendarEntity, FreeBusyComponent};
use crate::registry::PropertyIndex;

/// ## Summary
/// Converts the properties of a VFREEBUSY component.
///
/// Returns `Ok(None)` for an empty property list.
///
/// ## Errors
/// Returns `Malformed` for an unknown `FBTYPE`, an unparseable period list
/// or date, or a required value that is missing.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(entity_type = %EntityType::FreeBusy, principal = %ctx.principal())
)]
pub fn convert_freebusy(
    items: &[PropertyItem],
    ctx: &ConversionContext<'_>,
) -> ConversionResult<Option<Conversion>> {
    if items.is_empty() {
        tracing::debug!("No properties, nothing to convert");
        return Ok(None);
    }

    let mut entity = CalendarEntity::new(EntityType::FreeBusy);
    let mut changes = ChangeTable::new(ctx.principal().clone());

    entity.dates = common::resolve_dates(items, ctx, PropertyIndex::Dtend)?;

    for item in items {
        match ctx.registry().resolve(&item.name) {
            PropertyIndex::Attendee => common::attendee(item, ctx, &mut entity, &mut changes)?,
            PropertyIndex::Organizer => common::organizer(item, ctx, &mut entity, &mut changes)?,
            PropertyIndex::Comment => common::comment(item, &mut entity, &mut changes)?,
            // Consumed by the date resolver.
            PropertyIndex::Dtstart | PropertyIndex::Dtend | PropertyIndex::Duration => {}
            PropertyIndex::Dtstamp => {
                common::text(PropertyIndex::Dtstamp, item, &mut entity.dtstamp, &mut changes)?;
            }
            PropertyIndex::Uid => {
                common::text(PropertyIndex::Uid, item, &mut entity.uid, &mut changes)?;
            }
            PropertyIndex::FreeBusy => freebusy(item, ctx, &mut entity, &mut changes)?,
            PropertyIndex::Unknown => common::skip_unknown(item),
            kind @ (PropertyIndex::Categories
            | PropertyIndex::Class
            | PropertyIndex::Completed
            | PropertyIndex::Contact
            | PropertyIndex::Created
            | PropertyIndex::Description
            | PropertyIndex::Due
            | PropertyIndex::Exdate
            | PropertyIndex::Geo
            | PropertyIndex::LastModified
            | PropertyIndex::Location
            | PropertyIndex::PercentComplete
            | PropertyIndex::Priority
            | PropertyIndex::Rdate
            | PropertyIndex::RecurrenceId
            | PropertyIndex::RelatedTo
            | PropertyIndex::RequestStatus
            | PropertyIndex::Rrule
            | PropertyIndex::Sequence
            | PropertyIndex::Status
            | PropertyIndex::Summary
            | PropertyIndex::Transp
            | PropertyIndex::Url) => common::skip_unhandled(item, kind),
        }
    }

    tracing::debug!(changes = changes.len(), "Converted free/busy entity");

    Ok(Some(Conversion { entity, changes }))
}

/// One FREEBUSY property becomes one period group; groups are never merged.
fn freebusy(
    item: &PropertyItem,
    ctx: &ConversionContext<'_>,
    entity: &mut CalendarEntity,
    changes: &mut ChangeTable,
) -> ConversionResult<()> {
    common::required_value(item)?;
    let fb_type = map_fb_type(item.get_param_value("FBTYPE"))?;
    let periods = ctx.parsers().parse_periods(ctx.principal(), item)?;

    let group = FreeBusyComponent { fb_type, periods };
    tracing::trace!(%fb_type, periods = group.periods.len(), "Parsed free/busy group");

    changes.add_value(PropertyIndex::FreeBusy, group.clone());
    entity.add_freebusy(group);
    Ok(())
}
