//! Destination type descriptors.
//!
//! This module provides [`TypeDesc`], the tagged union describing a native
//! destination type well enough to bind into it. Descriptors are produced by
//! host code (or a type-introspection layer above it), are read-only, and can
//! be cached per type.
//!
//! # Example
//!
//! ```
//! use modelbind_core::TypeDesc;
//!
//! // list<int>
//! let numbers = TypeDesc::list(TypeDesc::Int);
//!
//! // (string, int)
//! let pair = TypeDesc::tuple(vec![TypeDesc::String, TypeDesc::Int]);
//!
//! // a registered composite type
//! let user = TypeDesc::object("User");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::type_hash::TypeHash;

/// Describes the category and shape of a native destination type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// Untyped destination; accepts any value unchanged
    Any,
    /// Boolean primitive
    Bool,
    /// Integer primitive
    Int,
    /// Floating point primitive
    Float,
    /// Text primitive
    String,
    /// Converter-backed named scalar (e.g. a unique identifier or a version)
    Scalar(TypeHash),
    /// Enumeration type, resolved through the type registry
    Enum(TypeHash),
    /// Fixed-size array with a declared element type
    Array(Box<TypeDesc>),
    /// Growable collection with a declared element type
    List(Box<TypeDesc>),
    /// Fixed-arity positional structure with per-component types
    Tuple(Vec<TypeDesc>),
    /// Composite object type, members resolved through the type registry
    Object(TypeHash),
}

impl TypeDesc {
    /// Descriptor for a converter-backed scalar type, by name.
    pub fn scalar(name: &str) -> Self {
        TypeDesc::Scalar(TypeHash::from_name(name))
    }

    /// Descriptor for a registered enumeration type, by name.
    pub fn enumeration(name: &str) -> Self {
        TypeDesc::Enum(TypeHash::from_name(name))
    }

    /// Descriptor for a registered composite type, by name.
    pub fn object(name: &str) -> Self {
        TypeDesc::Object(TypeHash::from_name(name))
    }

    /// Descriptor for an array of `element`.
    pub fn array(element: TypeDesc) -> Self {
        TypeDesc::Array(Box::new(element))
    }

    /// Descriptor for a list of `element`.
    pub fn list(element: TypeDesc) -> Self {
        TypeDesc::List(Box::new(element))
    }

    /// Descriptor for a tuple with the given component types.
    pub fn tuple(components: Vec<TypeDesc>) -> Self {
        TypeDesc::Tuple(components)
    }

    /// The declared element type of a collection destination, or [`TypeDesc::Any`]
    /// when none is discoverable.
    pub fn element_type(&self) -> &TypeDesc {
        match self {
            TypeDesc::Array(element) | TypeDesc::List(element) => element,
            _ => &TypeDesc::Any,
        }
    }

    /// Stable identity for this descriptor, used as the converter-registry
    /// target key. Structural descriptors compose their element identities.
    pub fn key(&self) -> TypeHash {
        match self {
            TypeDesc::Any => TypeHash::from_name("any"),
            TypeDesc::Bool => TypeHash::from_name("bool"),
            TypeDesc::Int => TypeHash::from_name("int"),
            TypeDesc::Float => TypeHash::from_name("float"),
            TypeDesc::String => TypeHash::from_name("string"),
            TypeDesc::Scalar(hash) | TypeDesc::Enum(hash) | TypeDesc::Object(hash) => *hash,
            TypeDesc::Array(element) => {
                TypeHash::compose(TypeHash::from_name("array"), &[element.key()])
            }
            TypeDesc::List(element) => {
                TypeHash::compose(TypeHash::from_name("list"), &[element.key()])
            }
            TypeDesc::Tuple(components) => {
                let keys: Vec<TypeHash> = components.iter().map(TypeDesc::key).collect();
                TypeHash::compose(TypeHash::from_name("tuple"), &keys)
            }
        }
    }

    /// Check if this descriptor is a collection category (array or list).
    pub fn is_collection(&self) -> bool {
        matches!(self, TypeDesc::Array(_) | TypeDesc::List(_))
    }
}

impl Display for TypeDesc {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Any => write!(f, "any"),
            TypeDesc::Bool => write!(f, "bool"),
            TypeDesc::Int => write!(f, "int"),
            TypeDesc::Float => write!(f, "float"),
            TypeDesc::String => write!(f, "string"),
            TypeDesc::Scalar(hash) => write!(f, "scalar({})", hash),
            TypeDesc::Enum(hash) => write!(f, "enum({})", hash),
            TypeDesc::Array(element) => write!(f, "array<{}>", element),
            TypeDesc::List(element) => write!(f, "list<{}>", element),
            TypeDesc::Tuple(components) => {
                write!(f, "(")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, ")")
            }
            TypeDesc::Object(hash) => write!(f, "object({})", hash),
        }
    }
}
