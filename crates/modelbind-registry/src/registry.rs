//! TypeRegistry - storage for registered destination types.
//!
//! This module provides [`TypeRegistry`], the central storage for composite
//! and enumeration types the engine can bind into. It provides O(1) lookup by
//! [`TypeHash`] and implements the [`TypeModel`] capability consumed by the
//! binding engine.
//!
//! # Thread Safety
//!
//! Registration is a distinct phase from binding: the registry is populated
//! single-threaded during host setup and becomes effectively read-only once
//! binds start. For multi-threaded registration after that point, the caller
//! must wrap the registry in appropriate synchronization.
//!
//! # Example
//!
//! ```
//! use modelbind_core::{EnumEntry, TypeHash, TypeModel};
//! use modelbind_registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_enum(EnumEntry::new("Color").with_member("Red", 0))
//!     .unwrap();
//!
//! assert!(registry.enumeration(TypeHash::from_name("Color")).is_some());
//! ```

use rustc_hash::FxHashMap;

use modelbind_core::{ClassEntry, EnumEntry, RegistrationError, TypeHash, TypeModel};

/// Storage for registered composite and enumeration types.
#[derive(Default)]
pub struct TypeRegistry {
    classes: FxHashMap<TypeHash, ClassEntry>,
    enums: FxHashMap<TypeHash, EnumEntry>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a composite type.
    ///
    /// Returns the type's identity on success. Registering a name that is
    /// already present (as a class or an enum) is a [`RegistrationError`].
    pub fn register_class(&mut self, entry: ClassEntry) -> Result<TypeHash, RegistrationError> {
        let hash = entry.type_hash;
        if self.classes.contains_key(&hash) || self.enums.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType(entry.name));
        }
        log::debug!(
            "registered class '{}' with {} member(s)",
            entry.name,
            entry.member_count()
        );
        self.classes.insert(hash, entry);
        Ok(hash)
    }

    /// Register an enumeration type.
    ///
    /// Member names must be unique within the enum; duplicates are a
    /// [`RegistrationError`].
    pub fn register_enum(&mut self, entry: EnumEntry) -> Result<TypeHash, RegistrationError> {
        let hash = entry.type_hash;
        if self.classes.contains_key(&hash) || self.enums.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType(entry.name));
        }
        for (i, member) in entry.members.iter().enumerate() {
            if entry.members[..i]
                .iter()
                .any(|earlier| earlier.name.eq_ignore_ascii_case(&member.name))
            {
                return Err(RegistrationError::DuplicateEnumMember {
                    enum_name: entry.name,
                    member_name: member.name.clone(),
                });
            }
        }
        log::debug!(
            "registered enum '{}' with {} member(s)",
            entry.name,
            entry.members.len()
        );
        self.enums.insert(hash, entry);
        Ok(hash)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.classes.len() + self.enums.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }
}

impl TypeModel for TypeRegistry {
    fn class(&self, hash: TypeHash) -> Option<&ClassEntry> {
        self.classes.get(&hash)
    }

    fn enumeration(&self, hash: TypeHash) -> Option<&EnumEntry> {
        self.enums.get(&hash)
    }
}
