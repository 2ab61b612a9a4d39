use super::Metadata;
use crate::{
    Error, IdMapper, IdMapperBuilder, ModificationStore, Result, SingleIdMapperBuilder,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Collects identifier bindings during startup configuration.
#[derive(Debug, Default)]
pub struct Builder {
    /// Entity name to its (possibly still unbound) mapper
    entities: IndexMap<String, SingleIdMapperBuilder>,

    /// Prefixed views, resolved against `entities` on build
    references: Vec<Reference>,
}

#[derive(Debug)]
struct Reference {
    name: String,
    target: String,
    prefix: String,
}

impl Builder {
    /// Binds the identifier of `entity` to `property`.
    pub fn id_property(&mut self, entity: &str, property: &str) -> Result<&mut Self> {
        self.id_property_with(entity, property, ModificationStore::default())
    }

    pub fn id_property_with(
        &mut self,
        entity: &str,
        property: &str,
        modification_store: ModificationStore,
    ) -> Result<&mut Self> {
        self.entities
            .entry(entity.to_string())
            .or_default()
            .add(property, modification_store)
            .map_err(|err| err.context(format!("entity `{entity}`")))?;

        Ok(self)
    }

    /// Registers `name` as a view of `target`'s identifier whose
    /// representation-map keys carry `prefix`.
    ///
    /// `target` may be an entity or another reference, declared in any order.
    /// Prefixes of chained references accumulate.
    pub fn prefixed(&mut self, name: &str, target: &str, prefix: &str) -> &mut Self {
        self.references.push(Reference {
            name: name.to_string(),
            target: target.to_string(),
            prefix: prefix.to_string(),
        });
        self
    }

    pub fn build(self) -> Result<Metadata> {
        let mut entities = IndexMap::with_capacity(self.entities.len() + self.references.len());

        for (name, builder) in self.entities {
            let mapper = builder
                .build()
                .map_err(|err| err.context(format!("entity `{name}`")))?;

            entities.insert(name, Arc::new(mapper) as Arc<dyn IdMapper>);
        }

        // References may target other references; resolve each once its
        // target exists, in as many passes as needed.
        let mut pending = self.references;

        while !pending.is_empty() {
            let before = pending.len();
            let mut unresolved = Vec::with_capacity(before);

            for reference in pending {
                if entities.contains_key(&reference.name) {
                    return Err(Error::configuration(format!(
                        "reference `{}` is already configured",
                        reference.name
                    )));
                }

                let Some(target) = entities.get(&reference.target) else {
                    unresolved.push(reference);
                    continue;
                };

                let mapper: Arc<dyn IdMapper> =
                    Arc::from(target.prefix_mapped_properties(&reference.prefix));
                entities.insert(reference.name, mapper);
            }

            if unresolved.len() == before {
                let reference = &unresolved[0];
                return Err(Error::configuration(format!(
                    "reference `{}` targets unknown entity `{}`",
                    reference.name, reference.target
                )));
            }

            pending = unresolved;
        }

        log::debug!("built identifier metadata; entities={}", entities.len());

        Ok(Metadata { entities })
    }
}
