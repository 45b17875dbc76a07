//! Registry entry types.
//!
//! This module provides the entry types stored in the type registry:
//!
//! - [`ClassEntry`] - composite destination types with bindable members
//! - [`EnumEntry`] - enumeration types with named integer members
//!
//! Supporting types:
//! - [`MemberEntry`], [`MemberKind`] - settable members (properties and fields)
//! - [`EnumMember`], [`EnumTraits`] - enum members and behavioral traits
//! - [`Constructor`], [`Setter`] - host-supplied construction and assignment

mod class;
mod enum_entry;

pub use class::{ClassEntry, Constructor, MemberEntry, MemberKind, Setter, downcast_instance};
pub use enum_entry::{EnumEntry, EnumMember, EnumTraits};
