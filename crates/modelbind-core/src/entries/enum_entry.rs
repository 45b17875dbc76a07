//! Enumeration type entry.

use bitflags::bitflags;

use crate::type_hash::TypeHash;

bitflags! {
    /// Behavioral traits of an enumeration type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EnumTraits: u8 {
        /// Members are combinable flag bits; integer sources may carry a
        /// bitwise combination of member values.
        const FLAGS = 1 << 0;
    }
}

/// A named member of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Integer value backing the member.
    pub value: i64,
}

impl EnumMember {
    /// Create an enum member.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Registry entry for an enumeration type.
///
/// Enumerations are integer-backed named constants. Name lookup at bind time
/// is case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    /// Type name.
    pub name: String,
    /// Type identity, computed from the name.
    pub type_hash: TypeHash,
    /// Behavioral traits.
    pub traits: EnumTraits,
    /// Defined members.
    pub members: Vec<EnumMember>,
}

impl EnumEntry {
    /// Create an enum entry.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            traits: EnumTraits::empty(),
            members: Vec::new(),
        }
    }

    /// Create an enum entry whose members are combinable flags.
    pub fn flags(name: impl Into<String>) -> Self {
        let mut entry = Self::new(name);
        entry.traits |= EnumTraits::FLAGS;
        entry
    }

    /// Add a member to the enum.
    pub fn with_member(mut self, name: impl Into<String>, value: i64) -> Self {
        self.members.push(EnumMember::new(name, value));
        self
    }

    /// Check if this enum supports combinable flag values.
    pub fn is_flags(&self) -> bool {
        self.traits.contains(EnumTraits::FLAGS)
    }

    /// Look up a member value by name, ignoring letter case.
    pub fn value_of_ignore_case(&self, name: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .map(|m| m.value)
    }

    /// Look up a member name by exact value.
    pub fn name_of(&self, value: i64) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.name.as_str())
    }

    /// Check whether an integer is a bitwise combination of member values.
    pub fn covers(&self, bits: i64) -> bool {
        let union = self.members.iter().fold(0i64, |acc, m| acc | m.value);
        bits & !union == 0
    }
}
