use std::path::Path;

use crate::component::ComponentDescriptor;
use crate::error::{Error, Result};
use crate::loader::SchemaLoader;
use crate::schema::SchemaDocument;

/// Validate internal consistency of a schema document.
///
/// Fail-fast, in order:
/// - `version`, `components`, `entities` are non-empty
/// - every component an entity lists exists in the component map
/// - every reference component points at an existing entity type
///
/// Both namespaces are `BTreeMap`s, so when several violations exist the
/// lexicographically first is the one reported.
pub fn validate(document: &SchemaDocument) -> Result<()> {
    if document.version.is_empty() {
        return Err(Error::MissingRequiredField { field: "version" });
    }
    if document.schema.components.is_empty() {
        return Err(Error::MissingRequiredField {
            field: "components",
        });
    }
    if document.schema.entities.is_empty() {
        return Err(Error::MissingRequiredField { field: "entities" });
    }

    validate_entity_components(document)?;
    validate_reference_components(document)?;

    Ok(())
}

/// Every component name listed by every entity must exist.
fn validate_entity_components(document: &SchemaDocument) -> Result<()> {
    for (entity_name, entity) in &document.schema.entities {
        for component_name in &entity.components {
            if !document.schema.components.contains_key(component_name) {
                return Err(Error::DanglingComponentReference {
                    entity: entity_name.clone(),
                    component: component_name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Every reference component must point at an existing entity type.
fn validate_reference_components(document: &SchemaDocument) -> Result<()> {
    for (component_name, descriptor) in &document.schema.components {
        if let ComponentDescriptor::Reference(reference) = descriptor {
            if !document.schema.entities.contains_key(&reference.entity_type) {
                return Err(Error::DanglingEntityReference {
                    component: component_name.clone(),
                    entity_type: reference.entity_type.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Read, load, and validate a schema document from `path`.
///
/// The file handle is scoped to the read; the returned document is ready
/// for synthesis.
pub fn init_document(path: impl AsRef<Path>, loader: &SchemaLoader) -> Result<SchemaDocument> {
    let raw = std::fs::read(path)?;
    let document = loader.load(&raw)?;
    validate(&document)?;
    Ok(document)
}
