//! Property-dispatch conversion of iCalendar components into calendar
//! entities, with a change-set describing every field that was set.
//!
//! A converter walks the component's property list once. Each property name
//! is resolved through the [`registry::PropertyRegistry`] to a
//! [`registry::PropertyIndex`]; a closed `match` over that index applies the
//! property to the entity and records the mutation in a
//! [`change::ChangeTable`]. Unknown property names are skipped, while a
//! recognised property with an unusable value fails the whole conversion.

pub mod change;
pub mod context;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod model;
pub mod parsers;
pub mod registry;
pub mod resolver;

pub use change::{ChangeEntry, ChangeTable, ChangeValue};
pub use context::{ConversionContext, DateResolver, PropertyParsers};
pub use convert::{Conversion, convert_component, convert_event, convert_freebusy, convert_todo};
pub use error::{ConversionError, ConversionResult};
pub use registry::{PropertyIndex, PropertyRegistry};
