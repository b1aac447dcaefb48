//! Default sub-entity parsers for ATTENDEE, ORGANIZER and FREEBUSY.

use kunai_core::config::ConversionConfig;
use kunai_core::error::CoreResult;
use kunai_core::types::PrincipalRef;
use kunai_rfc::rfc::ical::PropertyItem;
use kunai_rfc::rfc::ical::core::{DateTime as IcalDateTime, Period as IcalPeriod};
use kunai_rfc::rfc::ical::expand::{TimeZoneResolver, datetime_to_utc};
use kunai_rfc::rfc::ical::parse::parse_period_list;

use crate::context::PropertyParsers;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{Attendee, Organizer, Period};
use crate::resolver::TimezonePreferences;

/// Parses sub-entities straight from property values and parameters.
#[derive(Debug, Clone, Default)]
pub struct IcalPropertyParsers {
    zones: TimezonePreferences,
}

impl IcalPropertyParsers {
    #[must_use]
    pub const fn new(zones: TimezonePreferences) -> Self {
        Self { zones }
    }

    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the configured default is not
    /// an IANA zone.
    pub fn from_config(config: &ConversionConfig) -> CoreResult<Self> {
        TimezonePreferences::from_config(config).map(Self::new)
    }
}

fn required_value<'a>(item: &'a PropertyItem) -> ConversionResult<&'a str> {
    item.value()
        .ok_or_else(|| ConversionError::malformed(&item.name, "missing value"))
}

fn owned_param(item: &PropertyItem, name: &str) -> Option<String> {
    item.get_param_value(name).map(str::to_string)
}

fn parse_rsvp(item: &PropertyItem) -> ConversionResult<Option<bool>> {
    match item.get_param_value("RSVP") {
        None => Ok(None),
        Some("TRUE") => Ok(Some(true)),
        Some("FALSE") => Ok(Some(false)),
        Some(other) => Err(ConversionError::malformed("RSVP", other)),
    }
}

impl PropertyParsers for IcalPropertyParsers {
    fn parse_attendee(&self, item: &PropertyItem) -> ConversionResult<Attendee> {
        let cal_address = required_value(item)?;
        Ok(Attendee {
            cal_address: cal_address.to_string(),
            cn: owned_param(item, "CN"),
            cutype: owned_param(item, "CUTYPE"),
            role: owned_param(item, "ROLE"),
            partstat: owned_param(item, "PARTSTAT"),
            rsvp: parse_rsvp(item)?,
            sent_by: owned_param(item, "SENT-BY"),
            dir: owned_param(item, "DIR"),
            language: owned_param(item, "LANGUAGE"),
        })
    }

    fn parse_organizer(&self, item: &PropertyItem) -> ConversionResult<Organizer> {
        let cal_address = required_value(item)?;
        Ok(Organizer {
            cal_address: cal_address.to_string(),
            cn: owned_param(item, "CN"),
            sent_by: owned_param(item, "SENT-BY"),
            dir: owned_param(item, "DIR"),
            language: owned_param(item, "LANGUAGE"),
        })
    }

    fn parse_periods(
        &self,
        principal: &PrincipalRef,
        item: &PropertyItem,
    ) -> ConversionResult<Vec<Period>> {
        let value = required_value(item)?;
        let parsed =
            parse_period_list(value, item.tzid()).map_err(|e| ConversionError::parse(&item.name, &e))?;

        let floating = self.zones.floating_tz(principal);
        let mut tz_cache = TimeZoneResolver::new();
        let to_utc = |dt: &IcalDateTime, cache: &mut TimeZoneResolver| {
            datetime_to_utc(dt, floating, cache)
                .map_err(|e| ConversionError::malformed(&item.name, e.to_string()))
        };

        parsed
            .iter()
            .map(|period| {
                let start = to_utc(period.start(), &mut tz_cache)?;
                let end = match period {
                    IcalPeriod::Explicit { end, .. } => to_utc(end, &mut tz_cache)?,
                    IcalPeriod::Duration { duration, .. } => start
                        .checked_add_signed(duration.to_time_delta())
                        .ok_or_else(|| {
                            ConversionError::malformed(&item.name, "duration out of range")
                        })?,
                };
                if end < start {
                    return Err(ConversionError::malformed(
                        &item.name,
                        format!("period {period} ends before it starts"),
                    ));
                }
                Ok(Period::new(start, end))
            })
            .collect()
    }
}
