use crate::{Error, ModificationStore, Result};

use serde::{Deserialize, Serialize};

/// Identifier mapping configuration.
///
/// ```
/// let config = rewind::Config::from_json(r#"{
///     "entities": [{ "name": "User", "id": "id" }],
///     "references": [{ "name": "Post.author", "target": "User", "prefix": "author_" }]
/// }"#).unwrap();
///
/// let metadata = rewind::Metadata::from_config(&config).unwrap();
/// assert_eq!(metadata.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Entities and their identifier properties
    #[serde(default)]
    pub entities: Vec<EntityConfig>,

    /// Prefixed views of configured entities or other references
    #[serde(default)]
    pub references: Vec<ReferenceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    pub name: String,

    /// Identifier property
    pub id: String,

    #[serde(default)]
    pub modification_store: ModificationStore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    pub name: String,

    /// Entity whose identifier is referenced
    pub target: String,

    /// Prefix applied to representation-map keys
    pub prefix: String,
}

impl Config {
    /// Create a new Config with no entities
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity identified by `id`
    pub fn entity(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.entities.push(EntityConfig {
            name: name.into(),
            id: id.into(),
            modification_store: ModificationStore::default(),
        });
        self
    }

    /// Add a prefixed view of `target`
    pub fn reference(
        mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.references.push(ReferenceConfig {
            name: name.into(),
            target: target.into(),
            prefix: prefix.into(),
        });
        self
    }

    pub fn from_json(src: &str) -> Result<Config> {
        serde_json::from_str(src)
            .map_err(|err| Error::configuration(format!("invalid configuration: {err}")))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::configuration(format!("cannot serialize configuration: {err}")))
    }
}
