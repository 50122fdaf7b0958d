use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::component::ComponentDescriptor;

/// Top-level declarative schema for a dataset.
///
/// Built once by [`crate::SchemaLoader`], checked by
/// [`crate::validation::validate`], and read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDocument {
    /// Schema version; must be non-empty for the document to validate.
    pub version: String,
    pub schema: SchemaDefinition,
}

/// The two namespaces a schema declares: component types and entity types.
///
/// Both are `BTreeMap`s so iteration (and therefore which violation the
/// validator reports first) is stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaDefinition {
    pub components: BTreeMap<String, ComponentDescriptor>,
    pub entities: BTreeMap<String, EntityDefinition>,
}

/// A named composition of components.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EntityDefinition {
    /// Component names this entity type carries. Order is preserved from
    /// the document but carries no semantics.
    pub components: Vec<String>,
}
