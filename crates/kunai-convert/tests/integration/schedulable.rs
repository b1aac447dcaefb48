//! Event and to-do conversion scenarios.

use chrono::{TimeZone, Utc};
use kunai_convert::model::{Classification, Status, Transparency};
use kunai_convert::parsers::IcalPropertyParsers;
use kunai_convert::resolver::IcalDateResolver;
use kunai_convert::{ConversionContext, ConversionError, PropertyIndex, convert_event, convert_todo};
use kunai_core::config::ConversionConfig;

use super::helpers::*;

/// ## Summary
/// Test a representative VEVENT.
#[test_log::test]
fn event_with_participants_and_dates() {
    let fixture = Fixture::new();
    let items = vec![
        prop("UID", "evt-42"),
        prop("DTSTAMP", "20240101T120000Z"),
        prop("DTSTART", "20240610T140000").param(Parameter::tzid("Europe/Paris")),
        prop("DURATION", "PT45M"),
        prop("SUMMARY", "Design review"),
        prop("DESCRIPTION", "Walk through the draft"),
        prop("ORGANIZER", "mailto:alice@example.com").param(Parameter::cn("Alice")),
        prop("ATTENDEE", "mailto:bob@example.com").param(Parameter::partstat("NEEDS-ACTION")),
        prop("STATUS", "TENTATIVE"),
        prop("CLASS", "CONFIDENTIAL"),
        prop("TRANSP", "OPAQUE"),
        prop("CATEGORIES", "REVIEW,DESIGN"),
        prop("URL", "https://example.com/review"),
        prop("RRULE", "FREQ=WEEKLY"),
    ];

    let (entity, changes) = convert_event(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected")
        .into_parts();

    let dates = entity.dates.expect("dates should be resolved");
    assert_eq!(dates.start, Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap());
    assert_eq!(dates.end, Utc.with_ymd_and_hms(2024, 6, 10, 12, 45, 0).unwrap());
    assert!(!dates.all_day);

    assert_eq!(entity.summary.as_deref(), Some("Design review"));
    assert_eq!(entity.description.as_deref(), Some("Walk through the draft"));
    assert_eq!(
        entity.organizer.as_ref().and_then(|o| o.cn.as_deref()),
        Some("Alice")
    );
    assert_eq!(entity.attendees.len(), 1);
    assert_eq!(entity.status, Some(Status::Tentative));
    assert_eq!(entity.classification, Some(Classification::Confidential));
    assert_eq!(entity.transparency, Some(Transparency::Opaque));
    assert_eq!(entity.categories, vec!["REVIEW", "DESIGN"]);
    assert_eq!(entity.url.as_deref(), Some("https://example.com/review"));

    // No entries for date properties or unhandled RRULE.
    for kind in [
        PropertyIndex::Dtstart,
        PropertyIndex::Duration,
        PropertyIndex::Rrule,
    ] {
        assert_eq!(changes.entries_for(kind).count(), 0);
    }
    assert_eq!(changes.entries_for(PropertyIndex::Categories).count(), 2);
}

/// ## Summary
/// Test that an all-day event ends one day after its start.
#[test_log::test]
fn all_day_event_defaults_to_one_day() {
    let fixture = Fixture::new();
    let items = vec![prop("DTSTART", "20241225").param(Parameter::value_type("DATE"))];

    let entity = convert_event(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected")
        .entity;
    let dates = entity.dates.expect("dates should be resolved");
    assert!(dates.all_day);
    assert_eq!(dates.end - dates.start, chrono::TimeDelta::days(1));
}

/// ## Summary
/// Test that DTEND together with DURATION is rejected.
#[test_log::test]
fn event_with_end_and_duration_is_malformed() {
    let fixture = Fixture::new();
    let items = vec![
        prop("DTSTART", "20240101T090000Z"),
        prop("DTEND", "20240101T100000Z"),
        prop("DURATION", "PT1H"),
    ];

    let err = convert_event(&items, &fixture.ctx()).expect_err("conflict must fail");
    assert!(err.is_malformed());
}

/// ## Summary
/// Test that a to-do takes its end from DUE and accepts to-do statuses.
#[test_log::test]
fn todo_due_and_status() {
    let fixture = Fixture::new();
    let items = vec![
        prop("UID", "todo-7"),
        prop("DTSTART", "20240301T080000Z"),
        prop("DUE", "20240303T170000Z"),
        prop("STATUS", "IN-PROCESS"),
        prop("PRIORITY", "3"),
        prop("SEQUENCE", "0"),
    ];

    let entity = convert_todo(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected")
        .entity;

    let dates = entity.dates.expect("dates should be resolved");
    assert_eq!(dates.end, Utc.with_ymd_and_hms(2024, 3, 3, 17, 0, 0).unwrap());
    assert_eq!(entity.status, Some(Status::InProcess));
    assert_eq!(entity.priority, Some(3));
    assert_eq!(entity.sequence, Some(0));
}

/// ## Summary
/// Test that an event-only status fails a to-do.
#[test_log::test]
fn todo_rejects_event_status() {
    let fixture = Fixture::new();
    let items = vec![prop("STATUS", "TENTATIVE")];

    let err = convert_todo(&items, &fixture.ctx()).expect_err("TENTATIVE is not a to-do status");
    assert!(matches!(err, ConversionError::Malformed { context, .. } if context == "STATUS"));
}

/// ## Summary
/// Test that floating times follow the principal's configured zone.
#[test_log::test]
fn floating_event_uses_principal_timezone() {
    let fixture = Fixture::new();
    let config = ConversionConfig {
        default_timezone: "America/Denver".to_string(),
    };
    let dates = IcalDateResolver::from_config(&config)
        .expect("valid default")
        .with_principal_timezone(fixture.principal.clone(), "Australia/Sydney")
        .expect("valid zone");
    let parsers = IcalPropertyParsers::from_config(&config).expect("valid default");
    let ctx = ConversionContext::new(&fixture.principal, &fixture.registry, &dates, &parsers);

    let items = vec![prop("DTSTART", "20240115T100000")];
    let entity = convert_event(&items, &ctx)
        .expect("conversion should succeed")
        .expect("entity expected")
        .entity;

    // Sydney is UTC+11 in January.
    let dates = entity.dates.expect("dates should be resolved");
    assert_eq!(dates.start, Utc.with_ymd_and_hms(2024, 1, 14, 23, 0, 0).unwrap());
}

/// ## Summary
/// Test that an event conversion is repeatable.
#[test_log::test]
fn event_conversion_is_idempotent() {
    let fixture = Fixture::new();
    let items = vec![
        prop("UID", "evt-1"),
        prop("SUMMARY", "Standup"),
        prop("CATEGORIES", "DAILY"),
        prop("ATTENDEE", "mailto:bob@example.com").param(Parameter::rsvp(false)),
    ];

    let first = convert_event(&items, &fixture.ctx()).expect("first run");
    let second = convert_event(&items, &fixture.ctx()).expect("second run");
    assert_eq!(first, second);
}
