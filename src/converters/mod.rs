//! Built-in converter entries registered during binder construction.
//!
//! Each module exposes the destination descriptor for its target type and a
//! `converter()` constructor producing the registry entry. Hosts can replace
//! any of these by re-registering the same source/target pair.

pub mod guid;
pub mod numeric;
pub mod version;
