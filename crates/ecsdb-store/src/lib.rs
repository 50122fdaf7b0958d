//! SQLite storage adapter.
//!
//! Owns the connection lifecycle and the translation from abstract table
//! definitions to SQLite DDL. All emitted DDL is create-if-absent, so
//! applying the same definitions to an already-provisioned store is a
//! no-op.

pub mod adapter;
pub mod ddl;
pub mod errors;
pub mod sqlite;

pub use adapter::Store;
pub use errors::{Result, StoreError};
pub use sqlite::SqliteStore;
