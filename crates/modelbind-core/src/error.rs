//! Error types for registration and binding.
//!
//! Two distinct failure families exist:
//!
//! - [`RegistrationError`] - registry-population failures (duplicate types,
//!   duplicate enum members), raised before any bind runs
//! - [`BindError`] - bind-time failures; a bind either fully succeeds or fails
//!   with exactly one of these
//!
//! Every bind failure is raised at the point of detection and propagates up
//! the recursive call chain with `?`. No component swallows or retries a
//! failure, and partial binds are never returned.

use thiserror::Error;

use crate::type_hash::TypeHash;

/// Errors that occur while populating the type or converter registries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A type with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A duplicate enum member was registered.
    #[error("duplicate enum member: '{member_name}' in enum '{enum_name}'")]
    DuplicateEnumMember {
        /// The enum name.
        enum_name: String,
        /// The duplicate member name.
        member_name: String,
    },
}

/// Terminal result of a failed bind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// The value's runtime shape cannot be reconciled with the destination's
    /// structural category (e.g. a scalar where a sequence was required).
    #[error("cannot bind {source_type} to {destination}")]
    SourceNotAssignable {
        /// Shape name of the source value.
        source_type: &'static str,
        /// Rendered destination descriptor.
        destination: String,
    },

    /// A mapping key has no reconciled counterpart among the destination's
    /// bindable members.
    #[error("no bindable member on '{type_name}' matches key '{key}'")]
    MemberNotFound {
        /// The destination type name.
        type_name: String,
        /// The offending source key.
        key: String,
    },

    /// No enum member matches by name, numeric value, or flag combination.
    #[error("enum '{enum_name}' has no member matching {given}")]
    EnumMemberNotFound {
        /// The enum type name.
        enum_name: String,
        /// Rendered source value.
        given: String,
    },

    /// A positional destination's component count differs from the source
    /// sequence length.
    #[error("source has {got} component(s), destination tuple expects {expected}")]
    ArityMismatch {
        /// Component count of the destination.
        expected: usize,
        /// Length of the source sequence.
        got: usize,
    },

    /// A registered converter accepted applicability but failed during
    /// conversion.
    #[error("conversion of {source_type} to {destination} failed: {detail}")]
    ConversionFailed {
        /// Shape name of the source value.
        source_type: &'static str,
        /// Rendered destination descriptor.
        destination: String,
        /// The converter's own failure detail.
        detail: String,
    },

    /// A descriptor references a type the registry does not know.
    #[error("type not registered: {0}")]
    TypeNotFound(TypeHash),
}
