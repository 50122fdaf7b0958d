use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::registry::ComponentRegistry;
use crate::schema::{EntityDefinition, SchemaDefinition, SchemaDocument};

/// Skeleton of a schema document before component payloads are typed.
///
/// Components stay opaque because their shape depends on the `type` tag;
/// entities are uniform and decode eagerly. Absent fields default to empty
/// so structural completeness is reported by the validator, not as a
/// decode failure.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    version: String,
    #[serde(default)]
    schema: RawDefinition,
}

#[derive(Debug, Default, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    components: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    entities: BTreeMap<String, EntityDefinition>,
}

#[derive(Debug, Deserialize)]
struct TypeTag {
    #[serde(default, rename = "type")]
    tag: String,
}

/// Decodes raw schema bytes into a fully-typed [`SchemaDocument`].
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    registry: ComponentRegistry,
}

impl SchemaLoader {
    /// Create a loader resolving component tags against `registry`.
    pub fn new(registry: ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Loader backed by the built-in component registry.
    pub fn builtin() -> Self {
        Self::new(ComponentRegistry::builtin())
    }

    /// Decode `raw` into a typed document.
    ///
    /// Two-phase: the document skeleton first, then each opaque component
    /// payload through the decoder its `type` tag resolves to. Fails
    /// atomically; no partial document is ever returned. Does not
    /// validate referential integrity, see [`crate::validation::validate`].
    pub fn load(&self, raw: &[u8]) -> Result<SchemaDocument> {
        let raw_document: RawDocument = serde_json::from_slice(raw)?;

        let mut components = BTreeMap::new();
        for (name, payload) in raw_document.schema.components {
            let TypeTag { tag } = serde_json::from_value(payload.clone())?;
            let decoder =
                self.registry
                    .lookup(&tag)
                    .ok_or_else(|| Error::UnknownComponentType {
                        component: name.clone(),
                        tag: tag.clone(),
                    })?;
            components.insert(name, decoder(payload)?);
        }

        Ok(SchemaDocument {
            version: raw_document.version,
            schema: SchemaDefinition {
                components,
                entities: raw_document.schema.entities,
            },
        })
    }
}
