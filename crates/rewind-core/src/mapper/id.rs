mod abstract_id;

mod single;
pub use single::{SingleIdMapper, SingleIdMapperBuilder};

use crate::{Parameters, QueryParameterData, Record, Result, Value, ValueMap};

use std::fmt;

/// How changes to a mapped property are stored in the audit history.
///
/// Recorded on the mapper at binding time; mapping operations do not consult
/// it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ModificationStore {
    /// Every revision stores the full property value.
    #[default]
    Full,
}

/// Configuration-time side of an identifier mapper.
pub trait IdMapperBuilder {
    /// Binds the mapper to `property`.
    ///
    /// Fails with a configuration error if the mapper is already bound. The
    /// existing binding is left untouched.
    fn add(&mut self, property: &str, modification_store: ModificationStore) -> Result<()>;
}

/// Converts an entity's identifier between a live record, a representation
/// map and query parameters.
///
/// `None` stands in for an absent record or map. Absent input is never an
/// error: reads yield [`Value::Null`] and writes are skipped, with the single
/// exception of [`map_to_map_from_entity`](IdMapper::map_to_map_from_entity).
pub trait IdMapper: Send + Sync + fmt::Debug {
    /// Writes the identifier found in `data` into `record`.
    fn map_to_entity_from_map(
        &self,
        record: Option<&mut dyn Record>,
        data: Option<&ValueMap>,
    ) -> Result<()>;

    /// Reads the identifier stored in `data`.
    fn map_to_id_from_map(&self, data: Option<&ValueMap>) -> Value;

    /// Reads the identifier of `record`.
    fn map_to_id_from_entity(&self, record: Option<&dyn Record>) -> Result<Value>;

    /// Stores `id` in `data`.
    fn map_to_map_from_id(&self, data: Option<&mut ValueMap>, id: Value);

    /// Stores the identifier of `record` in `data`.
    ///
    /// When `record` is absent, an explicit [`Value::Null`] is written so the
    /// map records "present, value unknown" rather than omitting the key.
    fn map_to_map_from_entity(
        &self,
        data: &mut ValueMap,
        record: Option<&dyn Record>,
    ) -> Result<()>;

    /// Copies the identifier from `source` to `target`.
    fn map_to_entity_from_entity(
        &self,
        target: Option<&mut dyn Record>,
        source: Option<&dyn Record>,
    ) -> Result<()>;

    /// Returns a mapper that uses prefixed representation-map keys while still
    /// reading and writing the original record properties.
    fn prefix_mapped_properties(&self, prefix: &str) -> Box<dyn IdMapper>;

    /// Extracts the identifier of `record` as query parameters.
    fn map_to_query_parameters_from_id(
        &self,
        record: Option<&dyn Record>,
    ) -> Result<Vec<QueryParameterData>>;

    /// Wraps an already extracted identifier value as query parameters.
    fn map_to_query_parameters_from_value(&self, id: Value) -> Vec<QueryParameterData>;

    /// Restricts `parameters` to rows whose identifier equals (or, with
    /// `equals` false, differs from) `id`.
    fn add_id_equals_to_query(
        &self,
        parameters: &mut Parameters,
        id: Value,
        prefix: Option<&str>,
        equals: bool,
    ) {
        abstract_id::add_id_equals_to_query(
            parameters,
            self.map_to_query_parameters_from_value(id),
            prefix,
            equals,
        );
    }

    /// Like [`add_id_equals_to_query`](IdMapper::add_id_equals_to_query), but
    /// compares against named parameters bound later by the caller.
    fn add_named_id_equals_to_query(
        &self,
        parameters: &mut Parameters,
        prefix: Option<&str>,
        equals: bool,
    ) {
        abstract_id::add_named_id_equals_to_query(
            parameters,
            self.map_to_query_parameters_from_value(Value::Null),
            prefix,
            equals,
        );
    }

    /// Restricts `parameters` to rows where this mapper's identifier under
    /// `prefix1` equals `other`'s identifier under `prefix2`.
    fn add_ids_equal_to_query(
        &self,
        parameters: &mut Parameters,
        prefix1: Option<&str>,
        other: &dyn IdMapper,
        prefix2: Option<&str>,
    ) {
        abstract_id::add_ids_equal_to_query(
            parameters,
            self.map_to_query_parameters_from_value(Value::Null),
            prefix1,
            other.map_to_query_parameters_from_value(Value::Null),
            prefix2,
        );
    }
}
