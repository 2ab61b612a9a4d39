use super::{Getter, Property, RecordType, Setter};
use crate::{Error, ResolutionFailure, Result};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, RwLock},
};

/// Resolves property accessors by record type and property name.
///
/// Property tables are built on first use and memoized per type. Lookups from
/// many threads are fine; two threads racing to build the same table each
/// build one and the first insert wins.
#[derive(Debug, Default)]
pub struct Registry {
    types: RwLock<HashMap<TypeId, Arc<Accessors>>>,
}

#[derive(Debug)]
struct Accessors {
    properties: IndexMap<&'static str, Property>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The process-wide registry used by identifier mappers.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn resolve_getter(&self, ty: &RecordType, name: &str) -> Result<Getter> {
        let accessors = self.accessors(ty);
        let property = accessors.property(ty, name)?;

        property.get_getter().cloned().ok_or_else(|| {
            Error::property_resolution(ty.name(), name, ResolutionFailure::NotReadable)
        })
    }

    pub fn resolve_setter(&self, ty: &RecordType, name: &str) -> Result<Setter> {
        let accessors = self.accessors(ty);
        let property = accessors.property(ty, name)?;

        property.get_setter().cloned().ok_or_else(|| {
            Error::property_resolution(ty.name(), name, ResolutionFailure::NotWritable)
        })
    }

    /// Returns the number of record types with a memoized property table.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn accessors(&self, ty: &RecordType) -> Arc<Accessors> {
        if let Some(accessors) = self.read().get(&ty.id()) {
            return accessors.clone();
        }

        // Build outside the lock; the property table constructor is user code.
        let built = Arc::new(Accessors {
            properties: ty
                .properties()
                .into_iter()
                .map(|property| (property.name(), property))
                .collect(),
        });

        log::trace!(
            "built property table for `{}` ({} properties)",
            ty.name(),
            built.properties.len()
        );

        let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
        types.entry(ty.id()).or_insert(built).clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<TypeId, Arc<Accessors>>> {
        // The map is only ever extended with complete entries, so a poisoned
        // lock still guards consistent data.
        self.types.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Accessors {
    fn property(&self, ty: &RecordType, name: &str) -> Result<&Property> {
        self.properties.get(name).ok_or_else(|| {
            Error::property_resolution(ty.name(), name, ResolutionFailure::NotFound)
        })
    }
}
