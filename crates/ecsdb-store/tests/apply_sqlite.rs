use anyhow::Result;
use ecsdb_core::SchemaLoader;
use ecsdb_store::{SqliteStore, Store, StoreError};
use ecsdb_synth::{
    synthesize_document, ColumnConstraint, ColumnDefinition, IndexDefinition, StorageType,
    TableDefinition,
};

const SCHEMA_JSON: &[u8] = br#"{
    "version": "1.0",
    "schema": {
        "components": {
            "title": {"type": "text", "minLength": 1, "maxLength": 80},
            "rating": {"type": "integer", "min": 0, "max": 10},
            "author": {"type": "reference", "entityType": "user"},
            "draft": {"type": "boolean"}
        },
        "entities": {
            "post": {"components": ["title", "rating", "author", "draft"]},
            "user": {"components": ["title"]}
        }
    }
}"#;

async fn provisioned_store() -> Result<SqliteStore> {
    let document = SchemaLoader::builtin().load(SCHEMA_JSON)?;
    let tables = synthesize_document(&document)?;

    let store = SqliteStore::in_memory().await?;
    store.apply(&tables).await?;
    Ok(store)
}

async fn table_names(store: &SqliteStore) -> Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(store.pool())
    .await?;
    Ok(names)
}

#[tokio::test]
async fn applies_component_tables_and_bootstrap() -> Result<()> {
    let store = provisioned_store().await?;

    let names = table_names(&store).await?;
    for expected in [
        "component_author",
        "component_draft",
        "component_rating",
        "component_title",
        "entities",
        "schemas",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing table {expected}");
    }

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn apply_is_idempotent() -> Result<()> {
    let document = SchemaLoader::builtin().load(SCHEMA_JSON)?;
    let tables = synthesize_document(&document)?;

    let store = SqliteStore::in_memory().await?;
    store.apply(&tables).await?;
    let first = table_names(&store).await?;

    store.apply(&tables).await?;
    let second = table_names(&store).await?;

    assert_eq!(first, second);
    store.close().await;
    Ok(())
}

#[tokio::test]
async fn failed_apply_leaves_no_partial_table() -> Result<()> {
    let store = SqliteStore::in_memory().await?;

    // The index names a column the table does not have, so the second
    // statement of the definition fails after the first succeeded.
    let table = TableDefinition {
        name: "component_broken".to_string(),
        columns: vec![
            ColumnDefinition::new("id", StorageType::Text)
                .with_constraint(ColumnConstraint::PrimaryKey),
            ColumnDefinition::new("entity_id", StorageType::Text),
        ],
        indexes: vec![IndexDefinition {
            name: "idx_component_broken_missing".to_string(),
            column: "missing".to_string(),
        }],
    };

    let err = store
        .apply(&[table])
        .await
        .expect_err("index on missing column must fail");
    assert!(matches!(
        err,
        StoreError::Apply { ref table, .. } if table == "component_broken"
    ));

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE name = 'component_broken'",
    )
    .fetch_one(store.pool())
    .await?;
    assert_eq!(count, 0, "table must not survive a failed definition");

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn boolean_domain_is_enforced() -> Result<()> {
    let store = provisioned_store().await?;

    sqlx::query("INSERT INTO component_draft (id, entity_id, value) VALUES ('c1', 'e1', 1)")
        .execute(store.pool())
        .await?;

    let err = sqlx::query(
        "INSERT INTO component_draft (id, entity_id, value) VALUES ('c2', 'e1', 2)",
    )
    .execute(store.pool())
    .await
    .expect_err("value outside {0,1} must be rejected");
    assert!(err.to_string().contains("CHECK"), "unexpected error: {err}");

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn integer_range_is_enforced() -> Result<()> {
    let store = provisioned_store().await?;

    sqlx::query("INSERT INTO component_rating (id, entity_id, value) VALUES ('c1', 'e1', 10)")
        .execute(store.pool())
        .await?;

    sqlx::query("INSERT INTO component_rating (id, entity_id, value) VALUES ('c2', 'e1', 11)")
        .execute(store.pool())
        .await
        .expect_err("value above max must be rejected");

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn reference_value_rejects_duplicates_and_null() -> Result<()> {
    let store = provisioned_store().await?;

    sqlx::query("INSERT INTO component_author (id, entity_id, value) VALUES ('c1', 'e1', 'u1')")
        .execute(store.pool())
        .await?;

    sqlx::query("INSERT INTO component_author (id, entity_id, value) VALUES ('c2', 'e2', 'u1')")
        .execute(store.pool())
        .await
        .expect_err("duplicate reference value must be rejected");

    sqlx::query("INSERT INTO component_author (id, entity_id) VALUES ('c3', 'e3')")
        .execute(store.pool())
        .await
        .expect_err("null reference value must be rejected");

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn register_schema_records_version_once() -> Result<()> {
    let document = SchemaLoader::builtin().load(SCHEMA_JSON)?;
    let store = SqliteStore::in_memory().await?;

    store.register_schema(&document).await?;
    store.register_schema(&document).await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schemas WHERE version = '1.0'")
        .fetch_one(store.pool())
        .await?;
    assert_eq!(count, 1);

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn connect_creates_version_suffixed_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let base = dir.path().join("ecs.db");

    let store = SqliteStore::connect(&base, "1.0").await?;
    assert_eq!(store.engine(), "sqlite");
    store.close().await;

    assert!(dir.path().join("ecs.db-1.0").exists());
    assert!(!base.exists());
    Ok(())
}

#[tokio::test]
async fn connect_rejects_path_without_file_name() -> Result<()> {
    let err = SqliteStore::connect("/", "1.0")
        .await
        .expect_err("a bare root cannot carry a version suffix");
    assert!(matches!(err, StoreError::InvalidPath { .. }));
    Ok(())
}
