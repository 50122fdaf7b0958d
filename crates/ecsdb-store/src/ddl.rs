//! Rendering of abstract table definitions into SQLite DDL.

use ecsdb_synth::{
    ColumnConstraint, ColumnDefinition, IndexDefinition, StorageType, TableDefinition,
};

/// `CREATE TABLE IF NOT EXISTS` statement for a table definition.
pub fn create_table_sql(table: &TableDefinition) -> String {
    let columns: Vec<String> = table.columns.iter().map(column_sql).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table.name,
        columns.join(", ")
    )
}

/// `CREATE INDEX IF NOT EXISTS` statement for a secondary index.
pub fn create_index_sql(table: &TableDefinition, index: &IndexDefinition) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {}({})",
        index.name, table.name, index.column
    )
}

fn column_sql(column: &ColumnDefinition) -> String {
    let mut sql = format!("{} {}", column.name, storage_type_sql(column.storage_type));
    for constraint in &column.constraints {
        sql.push_str(&constraint_sql(&column.name, constraint));
    }
    sql
}

fn storage_type_sql(storage_type: StorageType) -> &'static str {
    match storage_type {
        StorageType::Text => "TEXT",
        StorageType::Integer => "INTEGER",
        StorageType::Timestamp => "TIMESTAMP",
    }
}

fn constraint_sql(column: &str, constraint: &ColumnConstraint) -> String {
    match constraint {
        ColumnConstraint::PrimaryKey => " PRIMARY KEY".to_string(),
        ColumnConstraint::NotNull => " NOT NULL".to_string(),
        ColumnConstraint::Unique => " UNIQUE".to_string(),
        ColumnConstraint::MinLength { length } => {
            format!(" CHECK (length({column}) >= {length})")
        }
        ColumnConstraint::MaxLength { length } => {
            format!(" CHECK (length({column}) <= {length})")
        }
        ColumnConstraint::Range { min, max } => match (min, max) {
            (Some(min), Some(max)) => {
                format!(" CHECK ({column} >= {min} AND {column} <= {max})")
            }
            (Some(min), None) => format!(" CHECK ({column} >= {min})"),
            (None, Some(max)) => format!(" CHECK ({column} <= {max})"),
            (None, None) => String::new(),
        },
        ColumnConstraint::OneOf { values } => {
            let values: Vec<String> = values.iter().map(i64::to_string).collect();
            format!(" CHECK ({column} IN ({}))", values.join(", "))
        }
        ColumnConstraint::DefaultNow => " DEFAULT CURRENT_TIMESTAMP".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ecsdb_core::{ComponentDescriptor, IntegerComponent, TextComponent};
    use ecsdb_synth::synthesize;

    use super::*;

    #[test]
    fn renders_text_table_with_length_checks() {
        let descriptor = ComponentDescriptor::Text(TextComponent {
            required: false,
            min_length: Some(3),
            max_length: Some(80),
        });
        let table = synthesize("title", &descriptor).expect("synthesize");

        let sql = create_table_sql(&table);
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS component_title (\
             id TEXT PRIMARY KEY, \
             entity_id TEXT, \
             value TEXT CHECK (length(value) >= 3) CHECK (length(value) <= 80), \
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, \
             updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)"
        );
    }

    #[test]
    fn renders_combined_range_check() {
        let descriptor = ComponentDescriptor::Integer(IntegerComponent {
            required: false,
            min: Some(0),
            max: Some(10),
        });
        let table = synthesize("rating", &descriptor).expect("synthesize");

        let sql = create_table_sql(&table);
        assert!(sql.contains("value INTEGER CHECK (value >= 0 AND value <= 10)"));
    }

    #[test]
    fn renders_index_statement() {
        let descriptor = ComponentDescriptor::Text(TextComponent::default());
        let table = synthesize("title", &descriptor).expect("synthesize");

        let sql = create_index_sql(&table, &table.indexes[0]);
        assert_eq!(
            sql,
            "CREATE INDEX IF NOT EXISTS idx_component_title_entity_id \
             ON component_title(entity_id)"
        );
    }
}
