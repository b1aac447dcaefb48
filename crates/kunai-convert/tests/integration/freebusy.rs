//! Free/busy conversion scenarios.

use chrono::{TimeZone, Utc};
use kunai_convert::model::{FreeBusyType, Period};
use kunai_convert::{ChangeValue, ConversionError, PropertyIndex, convert_freebusy};

use super::helpers::*;

// ============================================================================
// Basic conversion
// ============================================================================

/// ## Summary
/// Test that an empty property list is "nothing to convert", not an error.
#[test_log::test]
fn empty_property_list_converts_to_nothing() {
    let fixture = Fixture::new();
    let result = convert_freebusy(&[], &fixture.ctx()).expect("empty list must not fail");
    assert!(result.is_none());
}

/// ## Summary
/// Test a typical VFREEBUSY with dates, UID and one busy period.
#[test_log::test]
fn busy_period_with_uid() {
    let fixture = Fixture::new();
    let items = vec![
        prop("DTSTART", "20240101T000000Z"),
        prop("DTEND", "20240102T000000Z"),
        prop("UID", "abc-1"),
        prop("FREEBUSY", "20240101T090000Z/20240101T100000Z").param(Parameter::fb_type("BUSY")),
    ];

    let (entity, changes) = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected")
        .into_parts();

    assert_eq!(entity.uid.as_deref(), Some("abc-1"));
    assert_eq!(entity.freebusy.len(), 1);
    assert_eq!(entity.freebusy[0].fb_type, FreeBusyType::Busy);
    assert_eq!(
        entity.freebusy[0].periods,
        vec![Period::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        )]
    );

    let dates = entity.dates.expect("dates should be resolved");
    assert_eq!(dates.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(dates.end, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());

    let kinds: Vec<_> = changes.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![PropertyIndex::Uid, PropertyIndex::FreeBusy]);
    assert_eq!(changes.principal().as_str(), "/principals/users/alice");
}

/// ## Summary
/// Test that an unknown FBTYPE fails the whole conversion.
#[test_log::test]
fn unknown_fbtype_is_malformed() {
    let fixture = Fixture::new();
    let items = vec![
        prop("UID", "abc-1"),
        prop("FREEBUSY", "20240101T090000Z/20240101T100000Z")
            .param(Parameter::fb_type("UNKNOWN-TOKEN")),
    ];

    let err = convert_freebusy(&items, &fixture.ctx()).expect_err("FBTYPE must be rejected");
    assert!(matches!(
        err,
        ConversionError::Malformed { context, detail } if context == "FBTYPE" && detail == "UNKNOWN-TOKEN"
    ));
}

/// ## Summary
/// Test that a property name outside the registry is skipped silently.
#[test_log::test]
fn unknown_property_name_is_skipped() {
    let fixture = Fixture::new();
    let items = vec![prop("UID", "abc-1"), prop("X-VENDOR-FIELD", "whatever")];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("unknown names are not errors")
        .expect("entity expected");

    assert_eq!(conversion.changes.len(), 1);
    assert_eq!(
        conversion.changes.entries_for(PropertyIndex::Unknown).count(),
        0
    );
}

/// ## Summary
/// Test that every FREEBUSY item becomes its own group, in input order.
#[test_log::test]
fn multiple_freebusy_items_keep_order() {
    let fixture = Fixture::new();
    let items = vec![
        prop("FREEBUSY", "20240101T090000Z/PT1H").param(Parameter::fb_type("BUSY")),
        prop("FREEBUSY", "20240101T100000Z/PT1H").param(Parameter::fb_type("FREE")),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");

    let types: Vec<_> = conversion
        .entity
        .freebusy
        .iter()
        .map(|g| g.fb_type)
        .collect();
    assert_eq!(types, vec![FreeBusyType::Busy, FreeBusyType::Free]);

    let recorded: Vec<_> = conversion
        .changes
        .entries_for(PropertyIndex::FreeBusy)
        .map(|e| match &e.new {
            ChangeValue::FreeBusy(group) => group.fb_type,
            other => panic!("unexpected change value {other:?}"),
        })
        .collect();
    assert_eq!(recorded, types);
}

/// ## Summary
/// Test that FREEBUSY without FBTYPE defaults to BUSY.
#[test_log::test]
fn missing_fbtype_defaults_to_busy() {
    let fixture = Fixture::new();
    let items = vec![prop("FREEBUSY", "20240101T090000Z/20240101T093000Z")];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");
    assert_eq!(conversion.entity.freebusy[0].fb_type, FreeBusyType::Busy);
}

/// ## Summary
/// Test that one FREEBUSY item with several periods keeps them in order.
#[test_log::test]
fn period_list_order_is_preserved() {
    let fixture = Fixture::new();
    let items = vec![
        prop(
            "FREEBUSY",
            "20240101T150000Z/PT1H,20240101T090000Z/PT1H",
        )
        .param(Parameter::fb_type("BUSY-TENTATIVE")),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");
    let group = &conversion.entity.freebusy[0];
    assert_eq!(group.fb_type, FreeBusyType::BusyTentative);
    assert_eq!(group.periods.len(), 2);
    assert!(group.periods[0].start > group.periods[1].start);
}

// ============================================================================
// Change tracking
// ============================================================================

/// ## Summary
/// Test that converting the same input twice yields equal results.
#[test_log::test]
fn conversion_is_idempotent() {
    let fixture = Fixture::new();
    let items = vec![
        prop("DTSTART", "20240101T000000Z"),
        prop("UID", "abc-1"),
        prop("ATTENDEE", "mailto:bob@example.com").param(Parameter::cn("Bob")),
        prop("ORGANIZER", "mailto:alice@example.com"),
        prop("COMMENT", "weekly"),
        prop("FREEBUSY", "20240101T090000Z/PT1H").param(Parameter::fb_type("FREE")),
    ];

    let first = convert_freebusy(&items, &fixture.ctx()).expect("first run");
    let second = convert_freebusy(&items, &fixture.ctx()).expect("second run");
    assert_eq!(first, second);
}

/// ## Summary
/// Test that an identical UID repeat records nothing and a new UID records
/// exactly one entry with the previous value.
#[test_log::test]
fn uid_changes_are_recorded_once() {
    let fixture = Fixture::new();
    let items = vec![prop("UID", "abc-1"), prop("UID", "abc-1"), prop("UID", "abc-2")];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");

    assert_eq!(conversion.entity.uid.as_deref(), Some("abc-2"));
    let entries: Vec<_> = conversion.changes.entries_for(PropertyIndex::Uid).collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].old, None);
    assert_eq!(entries[1].old, Some(ChangeValue::from("abc-1")));
    assert_eq!(entries[1].new, ChangeValue::from("abc-2"));
}

/// ## Summary
/// Test that DTSTAMP follows the same record-on-difference rule.
#[test_log::test]
fn dtstamp_changes_are_recorded_once() {
    let fixture = Fixture::new();
    let items = vec![
        prop("DTSTAMP", "20240101T000000Z"),
        prop("DTSTAMP", "20240101T000000Z"),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");

    assert_eq!(conversion.entity.dtstamp.as_deref(), Some("20240101T000000Z"));
    assert_eq!(conversion.changes.len(), 1);
}

/// ## Summary
/// Test that attendees and comments are appended in input order.
#[test_log::test]
fn attendees_and_comments_append() {
    let fixture = Fixture::new();
    let items = vec![
        prop("ATTENDEE", "mailto:bob@example.com"),
        prop("COMMENT", "first").param(Parameter::language("en")),
        prop("ATTENDEE", "mailto:carol@example.com"),
        prop("COMMENT", "second"),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");

    let addresses: Vec<_> = conversion
        .entity
        .attendees
        .iter()
        .map(|a| a.cal_address.as_str())
        .collect();
    assert_eq!(addresses, vec!["mailto:bob@example.com", "mailto:carol@example.com"]);
    assert_eq!(conversion.entity.comments, vec!["first", "second"]);
    assert_eq!(conversion.changes.len(), 4);
}

/// ## Summary
/// Test that a required value that is absent is rejected with its name.
#[test_log::test]
fn empty_comment_is_malformed() {
    let fixture = Fixture::new();
    let items = vec![prop("COMMENT", "")];

    let err = convert_freebusy(&items, &fixture.ctx()).expect_err("empty COMMENT must fail");
    assert!(matches!(
        err,
        ConversionError::Malformed { context, detail } if context == "COMMENT" && detail == "missing value"
    ));
}

/// ## Summary
/// Test that a literal empty UID value is treated as missing.
#[test_log::test]
fn literal_empty_uid_is_malformed() {
    let fixture = Fixture::new();
    let items = vec![PropertyItem {
        name: "UID".to_string(),
        params: Vec::new(),
        value: Some(String::new()),
    }];

    let err = convert_freebusy(&items, &fixture.ctx()).expect_err("empty UID must fail");
    assert!(matches!(
        err,
        ConversionError::Malformed { context, detail } if context == "UID" && detail == "missing value"
    ));
}

/// ## Summary
/// Test that durations past the representable range fail instead of
/// overflowing, both for the entity dates and for a FREEBUSY period.
#[test_log::test]
fn oversized_durations_are_malformed() {
    let fixture = Fixture::new();

    let items = vec![prop("DTSTART", "20240101T090000Z"), prop("DURATION", "P99999999W")];
    let err = convert_freebusy(&items, &fixture.ctx()).expect_err("DURATION out of range");
    assert!(matches!(err, ConversionError::Malformed { context, .. } if context == "DURATION"));

    let items = vec![prop("FREEBUSY", "20240101T090000Z/P99999999W")];
    let err = convert_freebusy(&items, &fixture.ctx()).expect_err("period out of range");
    assert!(matches!(err, ConversionError::Malformed { context, .. } if context == "FREEBUSY"));
}

/// ## Summary
/// Test that the change set serializes for persistence.
#[test_log::test]
fn change_set_serializes() {
    let fixture = Fixture::new();
    let items = vec![
        prop("UID", "abc-1"),
        prop("FREEBUSY", "20240101T090000Z/PT1H").param(Parameter::fb_type("BUSY-UNAVAILABLE")),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");
    let json = serde_json::to_value(&conversion.changes).expect("serializable");

    assert_eq!(json["entries"][0]["kind"], "UID");
    assert_eq!(json["entries"][1]["kind"], "FREEBUSY");
    assert_eq!(json["entries"][1]["new"]["value"]["fb_type"], "BUSY-UNAVAILABLE");
}
