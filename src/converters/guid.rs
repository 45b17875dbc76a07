//! Text → unique-identifier conversion.

use modelbind_core::{Native, TypeDesc, Value, ValueKind};
use modelbind_registry::ConverterEntry;
use uuid::Uuid;

/// Name of the unique-identifier scalar type.
pub const TYPE_NAME: &str = "uuid";

/// Descriptor for a unique-identifier destination.
pub fn type_desc() -> TypeDesc {
    TypeDesc::scalar(TYPE_NAME)
}

/// Converter entry: text → [`Uuid`], produced as a type-erased instance.
pub fn converter() -> ConverterEntry {
    ConverterEntry::new(ValueKind::String, type_desc().key(), |value| {
        let Value::String(text) = value else {
            return Err("expected text".to_string());
        };
        Uuid::parse_str(text)
            .map(Native::instance)
            .map_err(|err| err.to_string())
    })
}
