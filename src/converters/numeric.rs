//! Text → number conversions.
//!
//! These cover the common case of numeric data arriving as text from the
//! dynamic side, e.g. form input bound into an integer member.

use modelbind_core::{Native, TypeDesc, Value, ValueKind};
use modelbind_registry::ConverterEntry;

/// Converter entry: text → integer.
pub fn int_converter() -> ConverterEntry {
    ConverterEntry::new(ValueKind::String, TypeDesc::Int.key(), |value| {
        let Value::String(text) = value else {
            return Err("expected text".to_string());
        };
        text.trim()
            .parse::<i64>()
            .map(Native::Int)
            .map_err(|err| err.to_string())
    })
}

/// Converter entry: text → float.
pub fn float_converter() -> ConverterEntry {
    ConverterEntry::new(ValueKind::String, TypeDesc::Float.key(), |value| {
        let Value::String(text) = value else {
            return Err("expected text".to_string());
        };
        text.trim()
            .parse::<f64>()
            .map(Native::Float)
            .map_err(|err| err.to_string())
    })
}

/// Converter entry: whole-number float → integer.
///
/// Dynamic runtimes frequently deliver all numbers as floats; a float carrying
/// a whole value narrows into an integer destination. Fractional values do not
/// apply and fall through to the structural strategies.
pub fn float_to_int_converter() -> ConverterEntry {
    ConverterEntry::new(ValueKind::Float, TypeDesc::Int.key(), |value| {
        let Value::Float(given) = value else {
            return Err("expected float".to_string());
        };
        if given.fract() == 0.0 && given.abs() <= i64::MAX as f64 {
            Ok(Native::Int(*given as i64))
        } else {
            Err(format!("{given} has no exact integer representation"))
        }
    })
    .with_guard(|value| matches!(value, Value::Float(given) if given.fract() == 0.0))
}
