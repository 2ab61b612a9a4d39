mod property;
pub use property::{Getter, Property, Setter};

mod registry;
pub use registry::Registry;

use std::any::{Any, TypeId};

/// A live record whose properties can be read and written by name.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record: Any + Send + Sync {
    /// Describes the runtime type of this record.
    fn record_type(&self) -> RecordType;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Runtime descriptor of a [`Record`] type.
///
/// Two descriptors are equal when they describe the same Rust type.
#[derive(Clone, Copy)]
pub struct RecordType {
    id: TypeId,
    name: &'static str,
    properties: fn() -> Vec<Property>,
}

impl RecordType {
    pub fn new<T: Record>(name: &'static str, properties: fn() -> Vec<Property>) -> RecordType {
        RecordType {
            id: TypeId::of::<T>(),
            name,
            properties,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the property table. Callers should go through a [`Registry`],
    /// which only does this once per type.
    pub fn properties(&self) -> Vec<Property> {
        (self.properties)()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RecordType {}

impl core::fmt::Debug for RecordType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("RecordType").field(&self.name).finish()
    }
}
