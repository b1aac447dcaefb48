//! Shared fixtures for conversion tests.

use kunai_convert::parsers::IcalPropertyParsers;
use kunai_convert::resolver::IcalDateResolver;
use kunai_convert::{ConversionContext, PropertyRegistry};
use kunai_core::types::PrincipalRef;

pub use kunai_rfc::rfc::ical::{Parameter, PropertyItem};

/// Owns everything a [`ConversionContext`] borrows.
pub struct Fixture {
    pub principal: PrincipalRef,
    pub registry: PropertyRegistry,
    pub dates: IcalDateResolver,
    pub parsers: IcalPropertyParsers,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_registry(PropertyRegistry::standard())
    }

    pub fn with_registry(registry: PropertyRegistry) -> Self {
        Self {
            principal: PrincipalRef::new("/principals/users/alice")
                .expect("Failed to build principal"),
            registry,
            dates: IcalDateResolver::default(),
            parsers: IcalPropertyParsers::default(),
        }
    }

    pub fn ctx(&self) -> ConversionContext<'_> {
        ConversionContext::new(&self.principal, &self.registry, &self.dates, &self.parsers)
    }
}

pub fn prop(name: &str, value: &str) -> PropertyItem {
    PropertyItem::new(name, value)
}
