//! Type-directed binding of dynamic script values into native Rust structures.
//!
//! modelbind is the marshaling boundary between an untyped value graph handed
//! over by a dynamic runtime and a statically typed object graph declared by
//! host code. Hosts register their destination types (composites, enums) and
//! optional converters; the engine recursively resolves every field, enum
//! member, collection element, tuple component, and nested object to its
//! destination representation, with deterministic conversion rules and typed
//! failure reporting.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use modelbind::prelude::*;
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct User {
//!     user_name: String,
//!     age: i64,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_class(
//!         ClassEntry::of::<User>("User")
//!             .with_property("user_name", TypeDesc::String, |instance, value| {
//!                 downcast_instance::<User>(instance, "User")?.user_name =
//!                     value.take_string()?;
//!                 Ok(())
//!             })
//!             .with_property("age", TypeDesc::Int, |instance, value| {
//!                 downcast_instance::<User>(instance, "User")?.age = value.take_int()?;
//!                 Ok(())
//!             }),
//!     )
//!     .unwrap();
//!
//! let binder = TypeSafeBinder::new(Arc::new(registry));
//!
//! // keys arrive in the dynamic side's convention - lower camel case
//! let value = Value::Mapping(vec![
//!     ("userName".to_string(), Value::from("ada")),
//!     ("age".to_string(), Value::Int(36)),
//! ]);
//!
//! let user: User = binder
//!     .bind(&value, &TypeDesc::object("User"))
//!     .unwrap()
//!     .take_instance()
//!     .unwrap();
//! assert_eq!(
//!     user,
//!     User {
//!         user_name: "ada".to_string(),
//!         age: 36,
//!     }
//! );
//! ```

pub mod binder;
pub mod converters;
pub mod interceptor;
pub mod options;

pub use binder::{Binder, TypeSafeBinder};
pub use interceptor::{MethodInterceptor, PassthroughInterceptor};
pub use options::BindingOptions;

/// Everything a host typically needs to register types and bind values.
pub mod prelude {
    pub use crate::binder::{Binder, TypeSafeBinder};
    pub use crate::interceptor::{MethodInterceptor, PassthroughInterceptor};
    pub use crate::options::BindingOptions;
    pub use modelbind_core::{
        BindError, ClassEntry, EnumEntry, EnumTraits, Instance, MemberKind, NameConvention,
        Native, RegistrationError, TypeDesc, TypeHash, TypeModel, Value, ValueKind,
        downcast_instance,
    };
    pub use modelbind_registry::{ConverterEntry, ConverterRegistry, TypeRegistry};
}
