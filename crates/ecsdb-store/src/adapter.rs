use async_trait::async_trait;

use ecsdb_synth::TableDefinition;

use crate::errors::Result;

/// Trait implemented by storage engines that can provision component
/// tables.
#[async_trait]
pub trait Store {
    /// Returns the engine identifier (e.g. `sqlite`).
    fn engine(&self) -> &'static str;

    /// Apply table definitions with create-if-absent semantics.
    ///
    /// Each definition is applied atomically; a failure names the
    /// offending table and leaves previously applied tables in place.
    async fn apply(&self, tables: &[TableDefinition]) -> Result<()>;
}
