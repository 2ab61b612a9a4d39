use super::Record;
use crate::{Error, ResolutionFailure, Result, Value};

use std::{any::Any, sync::Arc};

type GetFn = dyn Fn(&dyn Any) -> Option<Value> + Send + Sync;
type SetFn = dyn Fn(&mut dyn Any, Value) -> Option<Result<()>> + Send + Sync;

/// A named property of a record type together with its accessors.
#[derive(Clone)]
pub struct Property {
    name: &'static str,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl Property {
    pub fn new(name: &'static str) -> Property {
        Property {
            name,
            getter: None,
            setter: None,
        }
    }

    pub fn getter(mut self, getter: Getter) -> Property {
        self.getter = Some(getter);
        self
    }

    pub fn setter(mut self, setter: Setter) -> Property {
        self.setter = Some(setter);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn get_getter(&self) -> Option<&Getter> {
        self.getter.as_ref()
    }

    pub(crate) fn get_setter(&self) -> Option<&Setter> {
        self.setter.as_ref()
    }
}

impl core::fmt::Debug for Property {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("readable", &self.getter.is_some())
            .field("writable", &self.setter.is_some())
            .finish()
    }
}

/// Reads one property from records of a single type.
#[derive(Clone)]
pub struct Getter {
    property: &'static str,
    get: Arc<GetFn>,
}

impl Getter {
    pub fn new<R: Record>(property: &'static str, get: fn(&R) -> Value) -> Getter {
        Getter {
            property,
            get: Arc::new(move |record: &dyn Any| record.downcast_ref::<R>().map(get)),
        }
    }

    pub fn get(&self, record: &dyn Record) -> Result<Value> {
        (self.get)(record.as_any()).ok_or_else(|| {
            Error::property_resolution(
                record.record_type().name(),
                self.property,
                ResolutionFailure::TypeMismatch,
            )
        })
    }
}

impl core::fmt::Debug for Getter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Getter")
            .field("property", &self.property)
            .finish()
    }
}

/// Writes one property on records of a single type.
#[derive(Clone)]
pub struct Setter {
    property: &'static str,
    set: Arc<SetFn>,
}

impl Setter {
    pub fn new<R: Record>(
        property: &'static str,
        set: fn(&mut R, Value) -> Result<()>,
    ) -> Setter {
        Setter {
            property,
            set: Arc::new(move |record: &mut dyn Any, value: Value| {
                record.downcast_mut::<R>().map(|record| set(record, value))
            }),
        }
    }

    pub fn set(&self, record: &mut dyn Record, value: Value) -> Result<()> {
        let type_name = record.record_type().name();

        match (self.set)(record.as_any_mut(), value) {
            Some(res) => res.map_err(|err| {
                err.context(format!(
                    "failed to set property `{}` on `{}`",
                    self.property, type_name
                ))
            }),
            None => Err(Error::property_resolution(
                type_name,
                self.property,
                ResolutionFailure::TypeMismatch,
            )),
        }
    }
}

impl core::fmt::Debug for Setter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Setter")
            .field("property", &self.property)
            .finish()
    }
}
