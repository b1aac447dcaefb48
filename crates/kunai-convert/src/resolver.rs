//! Default date resolution for DTSTART / DTEND / DUE / DURATION.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::TimeDelta;
use chrono_tz::Tz;
use kunai_core::config::ConversionConfig;
use kunai_core::error::{CoreError, CoreResult};
use kunai_core::types::PrincipalRef;
use kunai_rfc::rfc::ical::PropertyItem;
use kunai_rfc::rfc::ical::expand::{TimeZoneResolver, UtcValue, value_to_utc};
use kunai_rfc::rfc::ical::parse::parse_duration;

use crate::context::DateResolver;
use crate::error::{ConversionError, ConversionResult};
use crate::model::EntityDates;

/// Zones floating date-times are interpreted in: per principal, else the
/// configured default.
#[derive(Debug, Clone)]
pub struct TimezonePreferences {
    default: Tz,
    by_principal: HashMap<PrincipalRef, Tz>,
}

impl TimezonePreferences {
    #[must_use]
    pub fn new(default: Tz) -> Self {
        Self {
            default,
            by_principal: HashMap::new(),
        }
    }

    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the configured default is not
    /// an IANA zone.
    pub fn from_config(config: &ConversionConfig) -> CoreResult<Self> {
        Ok(Self::new(config.default_tz()?))
    }

    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if `tzid` is not an IANA zone.
    pub fn with_principal(mut self, principal: PrincipalRef, tzid: &str) -> CoreResult<Self> {
        let tz = Tz::from_str(tzid).map_err(|_e| CoreError::UnknownTimezone(tzid.to_string()))?;
        self.by_principal.insert(principal, tz);
        Ok(self)
    }

    /// Zone for floating times seen on behalf of `principal`.
    #[must_use]
    pub fn floating_tz(&self, principal: &PrincipalRef) -> Tz {
        self.by_principal
            .get(principal)
            .copied()
            .unwrap_or(self.default)
    }
}

impl Default for TimezonePreferences {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

/// Resolves entity dates from iCalendar DATE / DATE-TIME values.
#[derive(Debug, Clone, Default)]
pub struct IcalDateResolver {
    zones: TimezonePreferences,
}

impl IcalDateResolver {
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

    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if `tzid` is not an IANA zone.
    pub fn with_principal_timezone(self, principal: PrincipalRef, tzid: &str) -> CoreResult<Self> {
        self.zones.with_principal(principal, tzid).map(Self::new)
    }
}

fn resolve_item(
    item: &PropertyItem,
    floating: Tz,
    tz_cache: &mut TimeZoneResolver,
) -> ConversionResult<UtcValue> {
    let value = item
        .value()
        .ok_or_else(|| ConversionError::malformed(&item.name, "missing value"))?;
    value_to_utc(value, item.value_type(), item.tzid(), floating, tz_cache)
        .map_err(|e| ConversionError::rfc(&item.name, &e))
}

impl DateResolver for IcalDateResolver {
    fn resolve(
        &self,
        principal: &PrincipalRef,
        start: Option<&PropertyItem>,
        end: Option<&PropertyItem>,
        duration: Option<&PropertyItem>,
    ) -> ConversionResult<Option<EntityDates>> {
        let Some(start_item) = start else {
            tracing::trace!("No start property, entity has no dates");
            return Ok(None);
        };

        if let (Some(end_item), Some(_)) = (end, duration) {
            return Err(ConversionError::malformed(
                &end_item.name,
                "DURATION must not be combined with an explicit end",
            ));
        }

        let floating = self.zones.floating_tz(principal);
        let mut tz_cache = TimeZoneResolver::new();
        let start = resolve_item(start_item, floating, &mut tz_cache)?;

        let end_instant = if let Some(end_item) = end {
            let end = resolve_item(end_item, floating, &mut tz_cache)?;
            if end.is_date != start.is_date {
                return Err(ConversionError::malformed(
                    &end_item.name,
                    "value type differs from the start",
                ));
            }
            end.instant
        } else if let Some(duration_item) = duration {
            let value = duration_item
                .value()
                .ok_or_else(|| ConversionError::malformed(&duration_item.name, "missing value"))?;
            let duration =
                parse_duration(value).map_err(|e| ConversionError::parse(&duration_item.name, &e))?;
            start
                .instant
                .checked_add_signed(duration.to_time_delta())
                .ok_or_else(|| {
                    ConversionError::malformed(&duration_item.name, "duration out of range")
                })?
        } else if start.is_date {
            start
                .instant
                .checked_add_signed(TimeDelta::days(1))
                .ok_or_else(|| ConversionError::malformed(&start_item.name, "date out of range"))?
        } else {
            start.instant
        };

        if end_instant < start.instant {
            return Err(ConversionError::malformed(
                end.or(duration).map_or("DTEND", |item| item.name.as_str()),
                "end precedes start",
            ));
        }

        tracing::trace!(
            start = %start.instant,
            end = %end_instant,
            all_day = start.is_date,
            "Resolved entity dates"
        );

        Ok(Some(EntityDates {
            start: start.instant,
            end: end_instant,
            all_day: start.is_date,
        }))
    }
}
