use thiserror::Error;

/// Core error type shared across ECSDB crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema document could not be read.
    #[error("failed to read schema document: {0}")]
    Io(#[from] std::io::Error),
    /// The schema document is not structurally valid JSON.
    #[error("malformed schema document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A component declares a type tag with no registered decoder.
    #[error("component {component} has unknown type {tag:?}")]
    UnknownComponentType { component: String, tag: String },
    /// A required top-level field is absent or empty.
    #[error("{field} field is required")]
    MissingRequiredField { field: &'static str },
    /// An entity lists a component that does not exist.
    #[error("entity {entity} references non-existent component {component}")]
    DanglingComponentReference { entity: String, component: String },
    /// A reference component points at an entity type that does not exist.
    #[error("component {component} references non-existent entity type {entity_type}")]
    DanglingEntityReference {
        component: String,
        entity_type: String,
    },
}

/// Convenience alias for results returned by ECSDB crates.
pub type Result<T> = std::result::Result<T, Error>;
