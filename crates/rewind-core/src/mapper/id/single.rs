use super::{IdMapper, IdMapperBuilder, ModificationStore};
use crate::{Error, QueryParameterData, Record, Registry, Result, Value, ValueMap};

/// Identifier mapper for entities identified by exactly one property.
///
/// The record property (`external`) and the representation-map key
/// (`internal`) start out identical. They only diverge through
/// [`prefix_mapped_properties`](IdMapper::prefix_mapped_properties).
///
/// Once built, a mapper holds no mutable state and can be shared freely
/// between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleIdMapper {
    /// Property read and written on live records
    external: String,

    /// Key used inside representation maps
    internal: String,

    modification_store: ModificationStore,
}

/// Configuration-time builder for a [`SingleIdMapper`].
///
/// Starts unbound; [`add`](IdMapperBuilder::add) binds it exactly once.
#[derive(Debug, Default)]
pub struct SingleIdMapperBuilder {
    binding: Option<(String, ModificationStore)>,
}

impl SingleIdMapper {
    /// Creates a mapper bound to `property`.
    ///
    /// The name is taken as given. Configuration input should go through
    /// [`SingleIdMapper::builder`], which rejects empty names.
    pub fn new(property: impl Into<String>) -> SingleIdMapper {
        let property = property.into();
        SingleIdMapper::with_names(property.clone(), property)
    }

    /// Creates a mapper reading `external` on records and storing the value
    /// under `internal` in representation maps.
    pub fn with_names(
        external: impl Into<String>,
        internal: impl Into<String>,
    ) -> SingleIdMapper {
        SingleIdMapper {
            external: external.into(),
            internal: internal.into(),
            modification_store: ModificationStore::default(),
        }
    }

    pub fn builder() -> SingleIdMapperBuilder {
        SingleIdMapperBuilder::default()
    }

    pub fn external_property(&self) -> &str {
        &self.external
    }

    pub fn internal_property(&self) -> &str {
        &self.internal
    }

    pub fn modification_store(&self) -> ModificationStore {
        self.modification_store
    }

    fn get(&self, record: &dyn Record) -> Result<Value> {
        Registry::global()
            .resolve_getter(&record.record_type(), &self.external)?
            .get(record)
    }

    fn set(&self, record: &mut dyn Record, value: Value) -> Result<()> {
        Registry::global()
            .resolve_setter(&record.record_type(), &self.external)?
            .set(record, value)
    }
}

impl IdMapper for SingleIdMapper {
    fn map_to_entity_from_map(
        &self,
        record: Option<&mut dyn Record>,
        data: Option<&ValueMap>,
    ) -> Result<()> {
        let (Some(record), Some(data)) = (record, data) else {
            return Ok(());
        };

        // A missing key loads as null, same as an explicit null.
        let value = data.get(&self.internal).cloned().unwrap_or_default();
        self.set(record, value)
    }

    fn map_to_id_from_map(&self, data: Option<&ValueMap>) -> Value {
        data.and_then(|data| data.get(&self.internal))
            .cloned()
            .unwrap_or_default()
    }

    fn map_to_id_from_entity(&self, record: Option<&dyn Record>) -> Result<Value> {
        match record {
            Some(record) => self.get(record),
            None => Ok(Value::Null),
        }
    }

    fn map_to_map_from_id(&self, data: Option<&mut ValueMap>, id: Value) {
        if let Some(data) = data {
            data.insert(self.internal.clone(), id);
        }
    }

    fn map_to_map_from_entity(
        &self,
        data: &mut ValueMap,
        record: Option<&dyn Record>,
    ) -> Result<()> {
        let value = match record {
            Some(record) => self.get(record)?,
            None => Value::Null,
        };

        data.insert(self.internal.clone(), value);
        Ok(())
    }

    fn map_to_entity_from_entity(
        &self,
        target: Option<&mut dyn Record>,
        source: Option<&dyn Record>,
    ) -> Result<()> {
        let (Some(target), Some(source)) = (target, source) else {
            return Ok(());
        };

        // Resolve both accessors before writing.
        let getter = Registry::global()
            .resolve_getter(&source.record_type(), &self.external)?;
        let setter = Registry::global()
            .resolve_setter(&target.record_type(), &self.external)?;
        setter.set(target, getter.get(source)?)
    }

    fn prefix_mapped_properties(&self, prefix: &str) -> Box<dyn IdMapper> {
        let internal = format!("{prefix}{}", self.internal);

        log::debug!(
            "prefixed identifier mapper; property=`{}`, key=`{}`",
            self.external,
            internal
        );

        Box::new(SingleIdMapper {
            external: self.external.clone(),
            internal,
            modification_store: self.modification_store,
        })
    }

    fn map_to_query_parameters_from_id(
        &self,
        record: Option<&dyn Record>,
    ) -> Result<Vec<QueryParameterData>> {
        let id = self.map_to_id_from_entity(record)?;
        Ok(self.map_to_query_parameters_from_value(id))
    }

    fn map_to_query_parameters_from_value(&self, id: Value) -> Vec<QueryParameterData> {
        vec![QueryParameterData::new(self.internal.clone(), id)]
    }
}

impl SingleIdMapperBuilder {
    pub fn new() -> SingleIdMapperBuilder {
        SingleIdMapperBuilder::default()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Name of the bound property, if any.
    pub fn property(&self) -> Option<&str> {
        self.binding.as_ref().map(|(property, _)| property.as_str())
    }

    /// Finalizes the builder.
    ///
    /// Fails with a property resolution error if no property was bound, since
    /// such a mapper could never resolve an accessor.
    pub fn build(self) -> Result<SingleIdMapper> {
        let Some((property, modification_store)) = self.binding else {
            return Err(Error::unbound_mapper());
        };

        Ok(SingleIdMapper {
            modification_store,
            ..SingleIdMapper::new(property)
        })
    }
}

impl IdMapperBuilder for SingleIdMapperBuilder {
    fn add(&mut self, property: &str, modification_store: ModificationStore) -> Result<()> {
        if let Some((bound, _)) = &self.binding {
            log::warn!("rejected second binding `{property}`; mapper is bound to `{bound}`");
            return Err(Error::already_bound(bound, property));
        }

        if property.is_empty() {
            log::warn!("rejected binding to an empty property name");
            return Err(Error::empty_property());
        }

        log::debug!("bound identifier mapper to property `{property}`");
        self.binding = Some((property.to_string(), modification_store));
        Ok(())
    }
}
