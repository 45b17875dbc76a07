//! The type-directed binding engine.
//!
//! [`TypeSafeBinder`] marshals dynamic script values into their corresponding
//! native destination types. Dispatch order is fixed:
//!
//! 1. Enum destinations resolve first - enums never accept null
//! 2. Null short-circuits for every other destination
//! 3. Identity - the value's shape is directly assignable
//! 4. A registered converter for (source shape, destination identity)
//! 5. Collection destinations unwind element by element
//! 6. Tuple destinations bind positionally
//! 7. Everything else is a composite object bind
//!
//! Binding is synchronous, CPU-bound recursion with depth bounded by the
//! nesting of the destination type graph. A self-referential type graph has no
//! cycle guard and will exhaust the stack; callers own that contract.

use std::sync::Arc;

use modelbind_core::{
    BindError, NameConvention, Native, TypeDesc, TypeHash, TypeModel, Value,
};
use modelbind_registry::{ConverterEntry, ConverterRegistry};

use crate::converters as builtin;

/// Tuple arity at which the final component becomes the open "rest" slot.
const REST_ARITY: usize = 8;

/// A binding strategy: dynamic value in, native value or typed failure out.
///
/// Multiple interchangeable strategies may coexist; the configuration layer
/// selects one per host object.
pub trait Binder: Send + Sync {
    /// Bind a dynamic value into the destination type.
    fn bind(&self, value: &Value, destination: &TypeDesc) -> Result<Native, BindError>;
}

/// The shipped binder: type-safe marshaling with converter support and strict
/// member reconciliation.
///
/// Construction registers the built-in converters (text → unique identifier,
/// text → version, text → number). Hosts may register additional converters
/// before the binder is shared across threads; afterwards the registry is
/// read-only.
pub struct TypeSafeBinder {
    types: Arc<dyn TypeModel>,
    converters: ConverterRegistry,
    convention: NameConvention,
}

impl TypeSafeBinder {
    /// Create a binder over the given type model with the default naming
    /// convention (lower camel case on the dynamic side).
    pub fn new(types: Arc<dyn TypeModel>) -> Self {
        Self::with_convention(types, NameConvention::default())
    }

    /// Create a binder with an explicit naming convention.
    pub fn with_convention(types: Arc<dyn TypeModel>, convention: NameConvention) -> Self {
        let mut converters = ConverterRegistry::new();
        converters.register(builtin::guid::converter());
        converters.register(builtin::version::converter());
        converters.register(builtin::numeric::int_converter());
        converters.register(builtin::numeric::float_converter());
        converters.register(builtin::numeric::float_to_int_converter());
        Self {
            types,
            converters,
            convention,
        }
    }

    /// Register an additional conversion rule. The same source/target pair
    /// replaces the prior entry. Must complete before concurrent binds begin.
    pub fn register_converter(&mut self, entry: ConverterEntry) {
        self.converters.register(entry);
    }

    /// The active naming convention.
    pub fn convention(&self) -> NameConvention {
        self.convention
    }

    fn bind_enum(&self, value: &Value, hash: TypeHash) -> Result<Native, BindError> {
        let entry = self
            .types
            .enumeration(hash)
            .ok_or(BindError::TypeNotFound(hash))?;
        let resolved = match value {
            Value::String(name) => entry.value_of_ignore_case(name),
            Value::Int(given) => {
                if entry.name_of(*given).is_some() {
                    Some(*given)
                } else if entry.is_flags() && entry.covers(*given) {
                    // combination of member bits
                    Some(*given)
                } else {
                    None
                }
            }
            _ => None,
        };
        match resolved {
            Some(member_value) => Ok(Native::Enum {
                ty: hash,
                value: member_value,
            }),
            None => Err(BindError::EnumMemberNotFound {
                enum_name: entry.name.clone(),
                given: value.to_string(),
            }),
        }
    }

    fn bind_collection(&self, value: &Value, destination: &TypeDesc) -> Result<Native, BindError> {
        let Value::Sequence(items) = value else {
            return Err(BindError::SourceNotAssignable {
                source_type: value.type_name(),
                destination: destination.to_string(),
            });
        };
        let element = destination.element_type();
        let mut bound = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                bound.push(zero_value(element));
            } else {
                bound.push(self.bind(item, element)?);
            }
        }
        // arrays are fixed-size: the intermediate list converts as the final step
        Ok(match destination {
            TypeDesc::Array(_) => Native::Array(bound),
            _ => Native::List(bound),
        })
    }

    fn bind_tuple(&self, value: &Value, components: &[TypeDesc]) -> Result<Native, BindError> {
        let Value::Sequence(items) = value else {
            return Err(BindError::SourceNotAssignable {
                source_type: value.type_name(),
                destination: TypeDesc::Tuple(components.to_vec()).to_string(),
            });
        };
        self.bind_tuple_components(items, components)
    }

    fn bind_tuple_components(
        &self,
        items: &[Value],
        components: &[TypeDesc],
    ) -> Result<Native, BindError> {
        if items.len() == components.len() {
            let mut bound = Vec::with_capacity(components.len());
            for (item, component) in items.iter().zip(components) {
                bound.push(self.bind(item, component)?);
            }
            return Ok(Native::Tuple(bound));
        }

        // open "rest" convention: an 8-component destination whose final slot
        // is itself a tuple takes the remainder as a nested tuple
        if components.len() == REST_ARITY && items.len() > REST_ARITY - 1 {
            if let TypeDesc::Tuple(rest) = &components[REST_ARITY - 1] {
                let mut bound = Vec::with_capacity(REST_ARITY);
                for (item, component) in items[..REST_ARITY - 1].iter().zip(components) {
                    bound.push(self.bind(item, component)?);
                }
                bound.push(self.bind_tuple_components(&items[REST_ARITY - 1..], rest)?);
                return Ok(Native::Tuple(bound));
            }
        }

        Err(BindError::ArityMismatch {
            expected: components.len(),
            got: items.len(),
        })
    }

    fn bind_object(&self, value: &Value, destination: &TypeDesc) -> Result<Native, BindError> {
        let TypeDesc::Object(hash) = destination else {
            return Err(BindError::SourceNotAssignable {
                source_type: value.type_name(),
                destination: destination.to_string(),
            });
        };
        let class = self
            .types
            .class(*hash)
            .ok_or(BindError::TypeNotFound(*hash))?;
        let mut instance = class.construct();

        // nothing to map: binding degenerates to default construction
        let Value::Mapping(entries) = value else {
            return Ok(Native::Instance(instance));
        };

        for (key, entry_value) in entries {
            let member = class
                .members()
                .find(|member| self.convention.dynamic_name(&member.name) == *key)
                .ok_or_else(|| BindError::MemberNotFound {
                    type_name: class.name.clone(),
                    key: key.clone(),
                })?;
            let bound = self.bind(entry_value, &member.ty)?;
            member.set(&mut instance, bound)?;
        }
        Ok(Native::Instance(instance))
    }
}

impl Binder for TypeSafeBinder {
    fn bind(&self, value: &Value, destination: &TypeDesc) -> Result<Native, BindError> {
        log::trace!("binding {} into {}", value.type_name(), destination);

        // enums resolve their member upfront and never accept null
        if let TypeDesc::Enum(hash) = destination {
            return self.bind_enum(value, *hash);
        }

        if value.is_null() {
            return Ok(Native::Null);
        }

        if let Some(native) = identity_bind(value, destination) {
            return Ok(native);
        }

        if let Some(entry) = self.converters.find(value.kind(), destination.key()) {
            if entry.applies(value) {
                return entry
                    .convert(value)
                    .map_err(|detail| BindError::ConversionFailed {
                        source_type: value.type_name(),
                        destination: destination.to_string(),
                        detail,
                    });
            }
        }

        match destination {
            TypeDesc::Array(_) | TypeDesc::List(_) => self.bind_collection(value, destination),
            TypeDesc::Tuple(components) => self.bind_tuple(value, components),
            _ => self.bind_object(value, destination),
        }
    }
}

/// Identity bind: the value's runtime shape is directly assignable to the
/// destination without conversion. Integers widen into float destinations;
/// untyped destinations take any value mirrored structurally.
fn identity_bind(value: &Value, destination: &TypeDesc) -> Option<Native> {
    match (value, destination) {
        (_, TypeDesc::Any) => Some(Native::from_value(value.clone())),
        (Value::Bool(v), TypeDesc::Bool) => Some(Native::Bool(*v)),
        (Value::Int(v), TypeDesc::Int) => Some(Native::Int(*v)),
        (Value::Int(v), TypeDesc::Float) => Some(Native::Float(*v as f64)),
        (Value::Float(v), TypeDesc::Float) => Some(Native::Float(*v)),
        (Value::String(s), TypeDesc::String) => Some(Native::String(s.clone())),
        _ => None,
    }
}

/// Zero value for a null element of a collection: value-typed elements get
/// their default, reference-typed elements stay null.
fn zero_value(destination: &TypeDesc) -> Native {
    match destination {
        TypeDesc::Bool => Native::Bool(false),
        TypeDesc::Int => Native::Int(0),
        TypeDesc::Float => Native::Float(0.0),
        _ => Native::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelbind_core::{ClassEntry, EnumEntry, downcast_instance};
    use modelbind_registry::TypeRegistry;

    #[derive(Default)]
    struct Point {
        x: i64,
        y: i64,
    }

    fn model() -> Arc<dyn TypeModel> {
        let mut registry = TypeRegistry::new();
        registry
            .register_class(
                ClassEntry::of::<Point>("Point")
                    .with_field("x", TypeDesc::Int, |instance, value| {
                        downcast_instance::<Point>(instance, "Point")?.x = value.take_int()?;
                        Ok(())
                    })
                    .with_field("y", TypeDesc::Int, |instance, value| {
                        downcast_instance::<Point>(instance, "Point")?.y = value.take_int()?;
                        Ok(())
                    }),
            )
            .unwrap();
        registry
            .register_enum(
                EnumEntry::new("Axis")
                    .with_member("Horizontal", 0)
                    .with_member("Vertical", 1),
            )
            .unwrap();
        Arc::new(registry)
    }

    fn binder() -> TypeSafeBinder {
        TypeSafeBinder::new(model())
    }

    #[test]
    fn identity_returns_primitives_unchanged() {
        let binder = binder();
        assert_eq!(
            binder.bind(&Value::Int(42), &TypeDesc::Int).unwrap(),
            Native::Int(42)
        );
        assert_eq!(
            binder.bind(&Value::Bool(true), &TypeDesc::Bool).unwrap(),
            Native::Bool(true)
        );
        assert_eq!(
            binder.bind(&Value::from("ada"), &TypeDesc::String).unwrap(),
            Native::String("ada".to_string())
        );
    }

    #[test]
    fn int_widens_into_float() {
        let binder = binder();
        assert_eq!(
            binder.bind(&Value::Int(3), &TypeDesc::Float).unwrap(),
            Native::Float(3.0)
        );
    }

    #[test]
    fn null_short_circuits_for_non_enums() {
        let binder = binder();
        assert_eq!(
            binder.bind(&Value::Null, &TypeDesc::String).unwrap(),
            Native::Null
        );
        assert_eq!(
            binder
                .bind(&Value::Null, &TypeDesc::object("Point"))
                .unwrap(),
            Native::Null
        );
    }

    #[test]
    fn null_never_binds_to_enum() {
        let binder = binder();
        let err = binder
            .bind(&Value::Null, &TypeDesc::enumeration("Axis"))
            .unwrap_err();
        assert!(matches!(err, BindError::EnumMemberNotFound { .. }));
    }

    #[test]
    fn scalar_against_collection_is_not_assignable() {
        let binder = binder();
        let err = binder
            .bind(&Value::Int(1), &TypeDesc::list(TypeDesc::Int))
            .unwrap_err();
        assert!(matches!(err, BindError::SourceNotAssignable { .. }));
    }

    #[test]
    fn mapping_against_primitive_is_not_assignable() {
        let binder = binder();
        let err = binder
            .bind(&Value::Mapping(vec![]), &TypeDesc::String)
            .unwrap_err();
        assert!(matches!(err, BindError::SourceNotAssignable { .. }));
    }

    #[test]
    fn unregistered_object_type_is_reported() {
        let binder = binder();
        let err = binder
            .bind(&Value::Mapping(vec![]), &TypeDesc::object("Missing"))
            .unwrap_err();
        assert_eq!(err, BindError::TypeNotFound(TypeHash::from_name("Missing")));
    }

    #[test]
    fn null_elements_take_zero_values() {
        let binder = binder();
        let sequence = Value::Sequence(vec![Value::Int(1), Value::Null, Value::Int(3)]);
        let bound = binder.bind(&sequence, &TypeDesc::list(TypeDesc::Int)).unwrap();
        assert_eq!(
            bound,
            Native::List(vec![Native::Int(1), Native::Int(0), Native::Int(3)])
        );

        // reference-typed elements stay null
        let sequence = Value::Sequence(vec![Value::Null]);
        let bound = binder
            .bind(&sequence, &TypeDesc::list(TypeDesc::String))
            .unwrap();
        assert_eq!(bound, Native::List(vec![Native::Null]));
    }

    #[test]
    fn untyped_destination_mirrors_the_value() {
        let binder = binder();
        let mixed = Value::Sequence(vec![Value::Int(1), Value::from("two")]);
        let bound = binder.bind(&mixed, &TypeDesc::list(TypeDesc::Any)).unwrap();
        assert_eq!(
            bound,
            Native::List(vec![Native::Int(1), Native::String("two".to_string())])
        );
    }

    #[test]
    fn tuple_rest_convention_nests() {
        let binder = binder();
        let components: Vec<TypeDesc> = (0..7)
            .map(|_| TypeDesc::Int)
            .chain([TypeDesc::tuple(vec![TypeDesc::Int, TypeDesc::Int])])
            .collect();
        let items: Vec<Value> = (0..9).map(Value::Int).collect();
        let bound = binder
            .bind(&Value::Sequence(items), &TypeDesc::Tuple(components))
            .unwrap();

        let Native::Tuple(parts) = bound else {
            panic!("expected tuple");
        };
        assert_eq!(parts.len(), 8);
        assert_eq!(parts[0], Native::Int(0));
        assert_eq!(
            parts[7],
            Native::Tuple(vec![Native::Int(7), Native::Int(8)])
        );
    }
}
