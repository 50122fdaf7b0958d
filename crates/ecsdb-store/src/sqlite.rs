use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use ecsdb_core::SchemaDocument;
use ecsdb_synth::TableDefinition;

use crate::adapter::Store;
use crate::ddl::{create_index_sql, create_table_sql};
use crate::errors::{Result, StoreError};

/// Bookkeeping tables created on every connect, independent of the schema
/// being provisioned.
const BOOTSTRAP_SQL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS entities (\
     id TEXT PRIMARY KEY, \
     type TEXT, \
     created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
    "CREATE INDEX IF NOT EXISTS idx_entities_type ON entities(type)",
    "CREATE TABLE IF NOT EXISTS schemas (\
     id TEXT PRIMARY KEY, \
     version TEXT, \
     definition TEXT)",
    "CREATE INDEX IF NOT EXISTS idx_schemas_version ON schemas(version)",
];

/// SQLite-backed store handling connection lifecycle and DDL application.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wrap a pre-configured pool. Bootstrap tables are not created; use
    /// [`SqliteStore::connect`] or [`SqliteStore::in_memory`] for a fully
    /// initialized store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the store for one schema version.
    ///
    /// Each schema version gets a physically distinct database file,
    /// `<path>-<version>`.
    pub async fn connect(path: impl AsRef<Path>, version: &str) -> Result<Self> {
        let store_path = versioned_path(path.as_ref(), version)?;
        if let Some(parent) = store_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&store_path)
            .create_if_missing(true);
        Self::open(options).await
    }

    /// Open an in-memory store, mainly for tests.
    pub async fn in_memory() -> Result<Self> {
        Self::open(SqliteConnectOptions::new().in_memory(true)).await
    }

    async fn open(options: SqliteConnectOptions) -> Result<Self> {
        // One connection: the pipeline is one-shot and sequential, and an
        // in-memory database exists per connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        let store = Self::new(pool);
        store.verify().await?;
        store.bootstrap().await?;
        Ok(store)
    }

    /// Check the connection is usable before any DDL is applied.
    async fn verify(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(StoreError::Connect)?;
        Ok(())
    }

    async fn bootstrap(&self) -> Result<()> {
        for statement in BOOTSTRAP_SQL {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Connect)?;
        }
        Ok(())
    }

    /// Record the schema document under its version, once.
    ///
    /// Re-registering an already recorded version is a no-op, matching the
    /// create-if-absent semantics of the rest of the provisioning step.
    pub async fn register_schema(&self, document: &SchemaDocument) -> Result<()> {
        let existing: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM schemas WHERE version = ?1")
                .bind(&document.version)
                .fetch_one(&self.pool)
                .await
                .map_err(StoreError::Register)?;
        if existing > 0 {
            return Ok(());
        }

        let definition = serde_json::to_string(document)?;
        sqlx::query("INSERT INTO schemas (id, version, definition) VALUES (?1, ?2, ?3)")
            .bind(Uuid::new_v4().to_string())
            .bind(&document.version)
            .bind(definition)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Register)?;
        Ok(())
    }

    /// Underlying pool, exposed for callers that need direct queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the store, releasing the connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn engine(&self) -> &'static str {
        "sqlite"
    }

    async fn apply(&self, tables: &[TableDefinition]) -> Result<()> {
        for table in tables {
            let apply_err = |source| StoreError::Apply {
                table: table.name.clone(),
                source,
            };

            // One transaction per definition: a failing index statement
            // must not leave its table behind.
            let mut tx = self.pool.begin().await.map_err(apply_err)?;

            sqlx::query(&create_table_sql(table))
                .execute(&mut *tx)
                .await
                .map_err(apply_err)?;

            for index in &table.indexes {
                sqlx::query(&create_index_sql(table, index))
                    .execute(&mut *tx)
                    .await
                    .map_err(apply_err)?;
            }

            tx.commit().await.map_err(apply_err)?;
        }
        Ok(())
    }
}

fn versioned_path(path: &Path, version: &str) -> Result<PathBuf> {
    match path.file_name() {
        Some(name) => {
            Ok(path.with_file_name(format!("{}-{version}", name.to_string_lossy())))
        }
        None => Err(StoreError::InvalidPath {
            path: path.to_path_buf(),
        }),
    }
}
