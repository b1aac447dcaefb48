//! Component dispatch and registry injection.

use kunai_convert::model::FreeBusyType;
use kunai_convert::{PropertyIndex, PropertyRegistry, convert_component, convert_freebusy};
use kunai_core::types::EntityType;
use kunai_rfc::rfc::ical::{Component, ComponentKind};

use super::helpers::*;

/// ## Summary
/// Test that each convertible component kind reaches its converter.
#[test_log::test]
fn component_kind_selects_converter() {
    let fixture = Fixture::new();
    let cases = [
        (Component::event(), EntityType::Event),
        (Component::todo(), EntityType::Todo),
        (Component::freebusy(), EntityType::FreeBusy),
    ];

    for (component, expected) in cases {
        let component = component.with_property(prop("UID", "dispatch-1"));
        let conversion = convert_component(&component, &fixture.ctx())
            .expect("conversion should succeed")
            .expect("entity expected");
        assert_eq!(conversion.entity.entity_type, expected);
        assert_eq!(conversion.entity.uid.as_deref(), Some("dispatch-1"));
    }
}

/// ## Summary
/// Test that non-entity components are "nothing to convert".
#[test_log::test]
fn other_components_convert_to_nothing() {
    let fixture = Fixture::new();
    for kind in [
        ComponentKind::Calendar,
        ComponentKind::Timezone,
        ComponentKind::Alarm,
        ComponentKind::Journal,
    ] {
        let component = Component::new(kind).with_property(prop("UID", "ignored"));
        let result = convert_component(&component, &fixture.ctx()).expect("must not fail");
        assert!(result.is_none(), "{kind:?} should not convert");
    }

    let custom = Component::custom("X-WIDGET").with_property(prop("UID", "ignored"));
    assert!(
        convert_component(&custom, &fixture.ctx())
            .expect("must not fail")
            .is_none()
    );
}

/// ## Summary
/// Test that a nested VALARM does not leak into its parent event.
#[test_log::test]
fn nested_components_are_not_merged() {
    let fixture = Fixture::new();
    let mut event = Component::event().with_property(prop("UID", "evt-1"));
    event
        .children
        .push(Component::new(ComponentKind::Alarm).with_property(prop("DESCRIPTION", "wake up")));

    let conversion = convert_component(&event, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");
    assert_eq!(conversion.entity.uid.as_deref(), Some("evt-1"));
    assert!(conversion.entity.description.is_none());
}

/// ## Summary
/// Test that an injected registry alias is dispatched like the standard name.
#[test_log::test]
fn injected_registry_alias_is_honoured() {
    let registry = PropertyRegistry::standard().with_name("X-BUSY-TIME", PropertyIndex::FreeBusy);
    let fixture = Fixture::with_registry(registry);
    let items = vec![prop("X-BUSY-TIME", "20240101T090000Z/PT1H").param(Parameter::fb_type("FREE"))];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("conversion should succeed")
        .expect("entity expected");
    assert_eq!(conversion.entity.freebusy[0].fb_type, FreeBusyType::Free);
    assert_eq!(fixture.registry.name_of(PropertyIndex::FreeBusy), Some("FREEBUSY"));
}

/// ## Summary
/// Test that an empty registry makes every property ignorable.
#[test_log::test]
fn empty_registry_skips_everything() {
    let fixture = Fixture::with_registry(PropertyRegistry::empty());
    let items = vec![
        prop("UID", "abc-1"),
        prop("FREEBUSY", "not a period").param(Parameter::fb_type("NONSENSE")),
    ];

    let conversion = convert_freebusy(&items, &fixture.ctx())
        .expect("unresolved names are not errors")
        .expect("entity expected");
    assert!(conversion.changes.is_empty());
    assert_eq!(conversion.entity.uid, None);
}
