//! Composite type entry and bindable members.
//!
//! A [`ClassEntry`] is the registry's description of a composite destination
//! type: how to default-construct an instance and which members can be set on
//! it. Members represent properties and fields uniformly; the builder keeps
//! the ordering contract (properties before fields) regardless of the order
//! the host adds them in.

use std::fmt;
use std::sync::Arc;

use crate::data_type::TypeDesc;
use crate::error::BindError;
use crate::native::{Instance, Native};
use crate::type_hash::TypeHash;

/// Default-construction path for a composite type.
///
/// The host supplies the closure, so non-public construction paths work the
/// same as public ones.
pub type Constructor = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Side-effecting member assignment on a type-erased instance.
pub type Setter = Arc<dyn Fn(&mut Instance, Native) -> Result<(), BindError> + Send + Sync>;

/// Whether a member is backed by a property or a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Encapsulated, accessor-backed member.
    Property,
    /// Directly exposed data member.
    Field,
}

/// A settable named member of a composite destination type.
///
/// Exactly one underlying representation (property or field) backs each
/// entry; binding treats both the same way. Immutable once constructed.
pub struct MemberEntry {
    /// Native-convention member name (snake case).
    pub name: String,
    /// Backing representation.
    pub kind: MemberKind,
    /// Declared destination type of the member.
    pub ty: TypeDesc,
    setter: Setter,
}

impl MemberEntry {
    /// Create a member entry.
    pub fn new(
        name: impl Into<String>,
        kind: MemberKind,
        ty: TypeDesc,
        setter: impl Fn(&mut Instance, Native) -> Result<(), BindError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            ty,
            setter: Arc::new(setter),
        }
    }

    /// Assign a bound value to this member on the given instance.
    pub fn set(&self, instance: &mut Instance, value: Native) -> Result<(), BindError> {
        (self.setter)(instance, value)
    }
}

impl fmt::Debug for MemberEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// Registry entry for a composite destination type.
pub struct ClassEntry {
    /// Type name.
    pub name: String,
    /// Type identity, computed from the name.
    pub type_hash: TypeHash,
    construct: Constructor,
    properties: Vec<MemberEntry>,
    fields: Vec<MemberEntry>,
}

impl ClassEntry {
    /// Create a class entry with an explicit construction closure.
    pub fn new(name: impl Into<String>, construct: impl Fn() -> Instance + Send + Sync + 'static) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            construct: Arc::new(construct),
            properties: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Create a class entry for a `Default`-constructible native type.
    pub fn of<T: Default + Send + Sync + 'static>(name: impl Into<String>) -> Self {
        Self::new(name, || Box::new(T::default()) as Instance)
    }

    /// Add a property-backed member.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        ty: TypeDesc,
        setter: impl Fn(&mut Instance, Native) -> Result<(), BindError> + Send + Sync + 'static,
    ) -> Self {
        self.properties
            .push(MemberEntry::new(name, MemberKind::Property, ty, setter));
        self
    }

    /// Add a field-backed member.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        ty: TypeDesc,
        setter: impl Fn(&mut Instance, Native) -> Result<(), BindError> + Send + Sync + 'static,
    ) -> Self {
        self.fields
            .push(MemberEntry::new(name, MemberKind::Field, ty, setter));
        self
    }

    /// Default-construct an instance of this type.
    pub fn construct(&self) -> Instance {
        (self.construct)()
    }

    /// Bindable members in stable order: properties before fields, each group
    /// in the order it was registered.
    pub fn members(&self) -> impl Iterator<Item = &MemberEntry> {
        self.properties.iter().chain(self.fields.iter())
    }

    /// Number of bindable members.
    pub fn member_count(&self) -> usize {
        self.properties.len() + self.fields.len()
    }
}

impl fmt::Debug for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassEntry")
            .field("name", &self.name)
            .field("type_hash", &self.type_hash)
            .field("properties", &self.properties)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Downcast a type-erased instance to its concrete type inside a setter.
pub fn downcast_instance<'a, T: 'static>(
    instance: &'a mut Instance,
    type_name: &str,
) -> Result<&'a mut T, BindError> {
    instance
        .downcast_mut::<T>()
        .ok_or_else(|| BindError::SourceNotAssignable {
            source_type: "instance",
            destination: type_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        label: String,
        count: i64,
    }

    fn probe_entry() -> ClassEntry {
        ClassEntry::of::<Probe>("Probe")
            .with_field("count", TypeDesc::Int, |instance, value| {
                downcast_instance::<Probe>(instance, "Probe")?.count = value.take_int()?;
                Ok(())
            })
            .with_property("label", TypeDesc::String, |instance, value| {
                downcast_instance::<Probe>(instance, "Probe")?.label = value.take_string()?;
                Ok(())
            })
    }

    #[test]
    fn construct_produces_defaults() {
        let entry = probe_entry();
        let instance = entry.construct();
        let probe = instance.downcast_ref::<Probe>().unwrap();
        assert_eq!(probe.label, "");
        assert_eq!(probe.count, 0);
    }

    #[test]
    fn properties_come_before_fields() {
        let entry = probe_entry();
        let names: Vec<&str> = entry.members().map(|m| m.name.as_str()).collect();
        // "label" was added second but is a property, so it lists first.
        assert_eq!(names, vec!["label", "count"]);
        assert_eq!(entry.member_count(), 2);
    }

    #[test]
    fn setter_assigns_through_entry() {
        let entry = probe_entry();
        let mut instance = entry.construct();
        let member = entry.members().find(|m| m.name == "count").unwrap();
        member.set(&mut instance, Native::Int(7)).unwrap();
        assert_eq!(instance.downcast_ref::<Probe>().unwrap().count, 7);
    }

    #[test]
    fn setter_rejects_wrong_shape() {
        let entry = probe_entry();
        let mut instance = entry.construct();
        let member = entry.members().find(|m| m.name == "count").unwrap();
        assert!(member.set(&mut instance, Native::Bool(true)).is_err());
    }
}
