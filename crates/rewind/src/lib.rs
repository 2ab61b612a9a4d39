//! Identifier mapping for audited entities.
//!
//! An [`IdMapper`] moves an entity's identifier between a live record, a
//! representation map ([`ValueMap`]) and query parameters. Records expose
//! their properties through `#[derive(Record)]`; [`Metadata`] holds the
//! mapper of every configured entity.
//!
//! ```
//! use rewind::{IdMapper, Record, SingleIdMapper, Value, ValueMap};
//!
//! #[derive(Debug, Default, Record)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! let mapper = SingleIdMapper::new("id");
//! let user = User { id: 42, name: "ann".into() };
//!
//! let mut data = ValueMap::new();
//! mapper.map_to_map_from_entity(&mut data, Some(&user)).unwrap();
//! assert_eq!(data.get("id"), Some(&Value::I64(42)));
//! ```

extern crate self as rewind;

pub mod config;
pub use config::Config;

pub mod metadata;
pub use metadata::Metadata;

pub use rewind_core::{
    bail, err, mapper, query, record, stmt, Error, IdMapper, IdMapperBuilder, ModificationStore,
    Parameters, QueryParameterData, Record, RecordType, Registry, ResolutionFailure, Result,
    SingleIdMapper, SingleIdMapperBuilder, Value, ValueMap,
};

pub use rewind_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use rewind_core::{
        record::{Getter, Property, Setter},
        stmt::Primitive,
        Record, RecordType, Result, Value,
    };
    pub use std::any::Any;
}
