//! Text → semantic-version conversion.

use modelbind_core::{Native, TypeDesc, Value, ValueKind};
use modelbind_registry::ConverterEntry;
use semver::Version;

/// Name of the version scalar type.
pub const TYPE_NAME: &str = "version";

/// Descriptor for a semantic-version destination.
pub fn type_desc() -> TypeDesc {
    TypeDesc::scalar(TYPE_NAME)
}

/// Converter entry: text → [`Version`], produced as a type-erased instance.
pub fn converter() -> ConverterEntry {
    ConverterEntry::new(ValueKind::String, type_desc().key(), |value| {
        let Value::String(text) = value else {
            return Err("expected text".to_string());
        };
        Version::parse(text)
            .map(Native::instance)
            .map_err(|err| err.to_string())
    })
}
