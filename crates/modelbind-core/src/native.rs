//! Bound output values on the native side of the boundary.

use std::any::Any;
use std::fmt;

use crate::error::BindError;
use crate::type_hash::TypeHash;
use crate::value::Value;

/// A type-erased native instance produced by default construction or by a
/// registered converter.
pub type Instance = Box<dyn Any + Send + Sync>;

/// A strongly-typed value produced by a successful bind.
///
/// Note: `Native` does not implement `Clone` because instances are uniquely
/// owned by the bind call that created them. `PartialEq` treats two instances
/// as never equal for the same reason.
pub enum Native {
    /// Null/absence
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value (owned)
    String(String),
    /// Growable collection of bound elements
    List(Vec<Native>),
    /// Fixed-size collection, produced from the intermediate list as the
    /// final step of an array bind
    Array(Vec<Native>),
    /// Fixed-arity positional structure
    Tuple(Vec<Native>),
    /// Identity-bound raw mapping (untyped destination)
    Map(Vec<(String, Native)>),
    /// Resolved enumeration member
    Enum {
        /// Identity of the enum type
        ty: TypeHash,
        /// Integer value of the resolved member (or flag combination)
        value: i64,
    },
    /// Type-erased native instance (composite object or converter-produced scalar)
    Instance(Instance),
}

impl Native {
    /// Wrap a concrete native value as a type-erased instance.
    pub fn instance<T: Send + Sync + 'static>(value: T) -> Self {
        Native::Instance(Box::new(value))
    }

    /// Mirror a raw dynamic value structurally, with no destination type
    /// directing the shape. Used for identity binds into untyped destinations.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Native::Null,
            Value::Bool(v) => Native::Bool(v),
            Value::Int(v) => Native::Int(v),
            Value::Float(v) => Native::Float(v),
            Value::String(s) => Native::String(s),
            Value::Sequence(items) => {
                Native::List(items.into_iter().map(Native::from_value).collect())
            }
            Value::Mapping(entries) => Native::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Native::from_value(value)))
                    .collect(),
            ),
        }
    }

    /// Get a human-readable name for this value's shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Native::Null => "null",
            Native::Bool(_) => "bool",
            Native::Int(_) => "int",
            Native::Float(_) => "float",
            Native::String(_) => "string",
            Native::List(_) => "list",
            Native::Array(_) => "array",
            Native::Tuple(_) => "tuple",
            Native::Map(_) => "map",
            Native::Enum { .. } => "enum",
            Native::Instance(_) => "instance",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Native::Null)
    }

    fn not_assignable(&self, destination: &str) -> BindError {
        BindError::SourceNotAssignable {
            source_type: self.type_name(),
            destination: destination.to_string(),
        }
    }

    /// Extract an owned text value.
    pub fn take_string(self) -> Result<String, BindError> {
        match self {
            Native::String(s) => Ok(s),
            other => Err(other.not_assignable("string")),
        }
    }

    /// Extract an integer value.
    pub fn take_int(self) -> Result<i64, BindError> {
        match self {
            Native::Int(v) => Ok(v),
            other => Err(other.not_assignable("int")),
        }
    }

    /// Extract a floating point value. Accepts integers, widening.
    pub fn take_float(self) -> Result<f64, BindError> {
        match self {
            Native::Float(v) => Ok(v),
            Native::Int(v) => Ok(v as f64),
            other => Err(other.not_assignable("float")),
        }
    }

    /// Extract a boolean value.
    pub fn take_bool(self) -> Result<bool, BindError> {
        match self {
            Native::Bool(v) => Ok(v),
            other => Err(other.not_assignable("bool")),
        }
    }

    /// Extract the elements of a list or array.
    pub fn take_elements(self) -> Result<Vec<Native>, BindError> {
        match self {
            Native::List(items) | Native::Array(items) | Native::Tuple(items) => Ok(items),
            other => Err(other.not_assignable("collection")),
        }
    }

    /// Extract the integer value of a resolved enum member.
    pub fn take_enum(self) -> Result<i64, BindError> {
        match self {
            Native::Enum { value, .. } => Ok(value),
            other => Err(other.not_assignable("enum")),
        }
    }

    /// Downcast a type-erased instance to its concrete type.
    pub fn take_instance<T: 'static>(self) -> Result<T, BindError> {
        match self {
            Native::Instance(instance) => instance
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(|_| BindError::SourceNotAssignable {
                    source_type: "instance",
                    destination: std::any::type_name::<T>().to_string(),
                }),
            other => Err(other.not_assignable(std::any::type_name::<T>())),
        }
    }
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Null => write!(f, "Null"),
            Native::Bool(v) => write!(f, "Bool({})", v),
            Native::Int(v) => write!(f, "Int({})", v),
            Native::Float(v) => write!(f, "Float({})", v),
            Native::String(s) => write!(f, "String({:?})", s),
            Native::List(items) => f.debug_tuple("List").field(items).finish(),
            Native::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Native::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
            Native::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Native::Enum { ty, value } => write!(f, "Enum({}, {})", ty, value),
            Native::Instance(_) => write!(f, "Instance(...)"),
        }
    }
}

impl PartialEq for Native {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Native::Null, Native::Null) => true,
            (Native::Bool(a), Native::Bool(b)) => a == b,
            (Native::Int(a), Native::Int(b)) => a == b,
            (Native::Float(a), Native::Float(b)) => a == b,
            (Native::String(a), Native::String(b)) => a == b,
            (Native::List(a), Native::List(b)) => a == b,
            (Native::Array(a), Native::Array(b)) => a == b,
            (Native::Tuple(a), Native::Tuple(b)) => a == b,
            (Native::Map(a), Native::Map(b)) => a == b,
            (Native::Enum { ty: a, value: x }, Native::Enum { ty: b, value: y }) => {
                a == b && x == y
            }
            // Instances are uniquely owned and can't be compared
            (Native::Instance(_), Native::Instance(_)) => false,
            _ => false,
        }
    }
}
