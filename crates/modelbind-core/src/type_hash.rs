//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash that uniquely identifies a
//! destination type. Unlike sequential IDs, hashes are computed deterministically
//! from names, enabling:
//!
//! - Forward references (hash computed before registration)
//! - No registration order dependencies
//! - Single map lookups (no secondary name→id maps)
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so a type named `"tuple"`
//! and a structural tuple descriptor never collide.
//!
//! # Examples
//!
//! ```
//! use modelbind_core::TypeHash;
//!
//! let user = TypeHash::from_name("User");
//! assert_eq!(user, TypeHash::from_name("User"));  // Deterministic
//!
//! // Structural descriptors compose their element identities
//! let list_of_user = TypeHash::compose(TypeHash::from_name("list"), &[user]);
//! assert_ne!(list_of_user, user);
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
mod hash_constants {
    /// Separator constant folded in between composed element hashes.
    pub const SEP: u64 = 0x6b8f2d41c7a3950e;

    /// Domain marker for named type hashes.
    pub const TYPE: u64 = 0x91d5437fb02ce6a8;

    /// Domain marker for composed (structural) hashes.
    pub const COMPOSE: u64 = 0x3ca871e09f54d2b6;
}

/// A deterministic 64-bit hash identifying a destination type.
///
/// Computed from the type name (for named types) or from the container name plus
/// element identities (for structural descriptors). The same input always
/// produces the same hash, so descriptors can be built before the type registry
/// is populated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelbind_core::TypeHash;
    ///
    /// let hash1 = TypeHash::from_name("User");
    /// let hash2 = TypeHash::from_name("User");
    /// assert_eq!(hash1, hash2);
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Compose a structural hash from a container identity and element identities.
    ///
    /// Element order matters: `tuple<int, string>` produces a different hash than
    /// `tuple<string, int>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelbind_core::TypeHash;
    ///
    /// let tuple = TypeHash::from_name("tuple");
    /// let int = TypeHash::from_name("int");
    /// let string = TypeHash::from_name("string");
    ///
    /// let a = TypeHash::compose(tuple, &[int, string]);
    /// let b = TypeHash::compose(tuple, &[string, int]);
    /// assert_ne!(a, b);
    /// ```
    #[inline]
    pub fn compose(container: TypeHash, elements: &[TypeHash]) -> Self {
        let mut hash = hash_constants::COMPOSE ^ container.0;
        for (i, element) in elements.iter().enumerate() {
            // wrapping_mul keeps the fold non-commutative so element order matters
            hash = hash
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(element.0 ^ (i as u64).wrapping_add(1));
        }
        TypeHash(hash)
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("User"), TypeHash::from_name("User"));
        assert_eq!(TypeHash::from_name("int"), TypeHash::from_name("int"));
    }

    #[test]
    fn type_hash_uniqueness() {
        let int_hash = TypeHash::from_name("int");
        let float_hash = TypeHash::from_name("float");
        let string_hash = TypeHash::from_name("string");

        assert_ne!(int_hash, float_hash);
        assert_ne!(int_hash, string_hash);
        assert_ne!(float_hash, string_hash);
    }

    #[test]
    fn composed_hash_determinism() {
        let list = TypeHash::from_name("list");
        let int = TypeHash::from_name("int");
        assert_eq!(
            TypeHash::compose(list, &[int]),
            TypeHash::compose(list, &[int])
        );
    }

    #[test]
    fn composed_hash_element_order_matters() {
        let tuple = TypeHash::from_name("tuple");
        let int = TypeHash::from_name("int");
        let string = TypeHash::from_name("string");

        assert_ne!(
            TypeHash::compose(tuple, &[int, string]),
            TypeHash::compose(tuple, &[string, int])
        );
    }

    #[test]
    fn composed_hash_differs_from_container() {
        let list = TypeHash::from_name("list");
        let int = TypeHash::from_name("int");
        let composed = TypeHash::compose(list, &[int]);

        assert_ne!(composed, list);
        assert_ne!(composed, int);
    }

    #[test]
    fn named_and_composed_domains_are_distinct() {
        // A zero-element composition must not collide with the bare name.
        let name = TypeHash::from_name("tuple");
        assert_ne!(TypeHash::compose(name, &[]), name);
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("User").is_empty());
    }

    #[test]
    fn hash_display() {
        let hash = TypeHash::from_name("User");
        assert!(format!("{}", hash).starts_with("0x"));
        assert!(format!("{:?}", hash).starts_with("TypeHash(0x"));
    }
}
