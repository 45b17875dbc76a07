//! ConverterRegistry - pluggable value-conversion rules.
//!
//! A converter transforms a value of one shape into a destination type without
//! structural recursion (text → unique identifier, text → version, text →
//! number). The engine queries the registry after the identity check and
//! before falling back to the structural strategies.
//!
//! # Lifecycle
//!
//! The registry is populated during binder construction (built-ins) and may be
//! extended by the host before concurrent binds begin. Registering the same
//! source/target pair twice replaces the prior entry. During a bind the
//! registry is read, never mutated.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use modelbind_core::{Native, TypeHash, Value, ValueKind};

/// Conversion function: source value in, native value or failure detail out.
///
/// The detail string is wrapped into `BindError::ConversionFailed` by the
/// engine, which knows the destination descriptor.
pub type ConvertFn = Arc<dyn Fn(&Value) -> Result<Native, String> + Send + Sync>;

/// Applicability guard consulted before a conversion runs.
pub type GuardFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A registered conversion rule from a value shape to a destination type.
pub struct ConverterEntry {
    source: ValueKind,
    target: TypeHash,
    guard: Option<GuardFn>,
    convert: ConvertFn,
}

impl ConverterEntry {
    /// Create a converter entry.
    pub fn new(
        source: ValueKind,
        target: TypeHash,
        convert: impl Fn(&Value) -> Result<Native, String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source,
            target,
            guard: None,
            convert: Arc::new(convert),
        }
    }

    /// Attach an applicability guard. When the guard rejects a value, the
    /// engine falls through to the structural strategies instead of failing.
    pub fn with_guard(mut self, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    /// The source shape this entry converts from.
    pub fn source(&self) -> ValueKind {
        self.source
    }

    /// The destination identity this entry converts to.
    pub fn target(&self) -> TypeHash {
        self.target
    }

    /// Check whether this entry applies to a concrete value.
    pub fn applies(&self, value: &Value) -> bool {
        self.source == value.kind() && self.guard.as_ref().map_or(true, |guard| guard(value))
    }

    /// Run the conversion.
    pub fn convert(&self, value: &Value) -> Result<Native, String> {
        (self.convert)(value)
    }
}

/// Storage for registered conversion rules, keyed by (source shape, target
/// identity).
#[derive(Default)]
pub struct ConverterRegistry {
    entries: FxHashMap<(ValueKind, TypeHash), ConverterEntry>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conversion rule. The same source/target pair replaces the
    /// prior entry.
    pub fn register(&mut self, entry: ConverterEntry) {
        log::trace!(
            "registered converter {:?} -> {}",
            entry.source(),
            entry.target()
        );
        self.entries.insert((entry.source, entry.target), entry);
    }

    /// Look up a conversion rule for a source shape and destination identity.
    pub fn find(&self, source: ValueKind, target: TypeHash) -> Option<&ConverterEntry> {
        self.entries.get(&(source, target))
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelbind_core::TypeDesc;

    fn doubling_entry() -> ConverterEntry {
        ConverterEntry::new(ValueKind::Int, TypeDesc::Int.key(), |value| match value {
            Value::Int(v) => Ok(Native::Int(v * 2)),
            _ => Err("expected int".to_string()),
        })
    }

    #[test]
    fn register_and_find() {
        let mut registry = ConverterRegistry::new();
        registry.register(doubling_entry());

        let entry = registry
            .find(ValueKind::Int, TypeDesc::Int.key())
            .expect("entry registered");
        assert_eq!(entry.convert(&Value::Int(3)).unwrap(), Native::Int(6));
        assert!(registry.find(ValueKind::String, TypeDesc::Int.key()).is_none());
    }

    #[test]
    fn reregistration_replaces() {
        let mut registry = ConverterRegistry::new();
        registry.register(doubling_entry());
        registry.register(ConverterEntry::new(
            ValueKind::Int,
            TypeDesc::Int.key(),
            |value| match value {
                Value::Int(v) => Ok(Native::Int(v + 1)),
                _ => Err("expected int".to_string()),
            },
        ));

        assert_eq!(registry.len(), 1);
        let entry = registry.find(ValueKind::Int, TypeDesc::Int.key()).unwrap();
        assert_eq!(entry.convert(&Value::Int(3)).unwrap(), Native::Int(4));
    }

    #[test]
    fn guard_controls_applicability() {
        let entry = doubling_entry().with_guard(|value| matches!(value, Value::Int(v) if *v >= 0));
        assert!(entry.applies(&Value::Int(1)));
        assert!(!entry.applies(&Value::Int(-1)));
        assert!(!entry.applies(&Value::Bool(true)));
    }
}
