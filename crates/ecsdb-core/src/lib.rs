//! Core contracts for ECSDB.
//!
//! This crate defines the canonical schema types, the component type
//! registry, the two-phase schema loader, and the validator shared across
//! the synthesizer, the store adapter, and the CLI.

pub mod component;
pub mod error;
pub mod loader;
pub mod registry;
pub mod schema;
pub mod validation;

pub use component::{
    BooleanComponent, ComponentDescriptor, DatetimeComponent, EmailComponent, IntegerComponent,
    ReferenceComponent, TextComponent, UrlComponent,
};
pub use error::{Error, Result};
pub use loader::SchemaLoader;
pub use registry::{ComponentDecoder, ComponentRegistry};
pub use schema::{EntityDefinition, SchemaDefinition, SchemaDocument};
pub use validation::{init_document, validate};
