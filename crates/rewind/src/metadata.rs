mod builder;
pub use builder::Builder;

use crate::{Config, IdMapper, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Identifier mappers of every configured entity.
///
/// Built once during startup and shared read-only afterwards.
#[derive(Debug, Default)]
pub struct Metadata {
    entities: IndexMap<String, Arc<dyn IdMapper>>,
}

impl Metadata {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds metadata from a deserialized [`Config`].
    ///
    /// The first configuration error aborts the build.
    pub fn from_config(config: &Config) -> Result<Metadata> {
        let mut builder = Metadata::builder();

        for entity in &config.entities {
            builder.id_property_with(&entity.name, &entity.id, entity.modification_store)?;
        }

        for reference in &config.references {
            builder.prefixed(&reference.name, &reference.target, &reference.prefix);
        }

        builder.build()
    }

    pub fn id_mapper(&self, entity: &str) -> Option<&Arc<dyn IdMapper>> {
        self.entities.get(entity)
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
