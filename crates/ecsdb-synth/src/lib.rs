//! Storage schema synthesis.
//!
//! Turns validated component descriptors into abstract table definitions
//! the store adapter can apply. The model is engine-agnostic; rendering to
//! concrete DDL lives in `ecsdb-store`.

pub mod errors;
pub mod model;
pub mod synthesize;

pub use errors::{Result, SynthError};
pub use model::{
    ColumnConstraint, ColumnDefinition, IndexDefinition, StorageType, TableDefinition,
};
pub use synthesize::{synthesize, synthesize_document};
