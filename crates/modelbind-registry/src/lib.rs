//! Registries consumed by the modelbind engine.
//!
//! - [`TypeRegistry`] - registered composite and enumeration types; implements
//!   the `TypeModel` introspection capability
//! - [`ConverterRegistry`] - pluggable value-conversion rules queried during
//!   bind dispatch

pub mod converters;
pub mod registry;

pub use converters::{ConvertFn, ConverterEntry, ConverterRegistry, GuardFn};
pub use registry::TypeRegistry;
