use ecsdb_core::{ComponentDescriptor, SchemaDocument};

use crate::errors::{Result, SynthError};
use crate::model::{
    ColumnConstraint, ColumnDefinition, IndexDefinition, StorageType, TableDefinition,
};

/// Build the table definition for one component.
///
/// Every component table carries the same base columns (`id`, `entity_id`,
/// `created_at`, `updated_at`) plus a `value` column typed and constrained
/// by the descriptor variant. The match is exhaustive so a new variant
/// cannot ship without a synthesis decision.
pub fn synthesize(name: &str, descriptor: &ComponentDescriptor) -> Result<TableDefinition> {
    let table_name = format!("component_{name}");

    let value = match descriptor {
        ComponentDescriptor::Text(text) => {
            let mut column = ColumnDefinition::new("value", StorageType::Text);
            if let Some(length) = text.min_length {
                column = column.with_constraint(ColumnConstraint::MinLength { length });
            }
            if let Some(length) = text.max_length {
                column = column.with_constraint(ColumnConstraint::MaxLength { length });
            }
            column
        }
        ComponentDescriptor::Integer(integer) => {
            let mut column = ColumnDefinition::new("value", StorageType::Integer);
            if integer.min.is_some() || integer.max.is_some() {
                column = column.with_constraint(ColumnConstraint::Range {
                    min: integer.min,
                    max: integer.max,
                });
            }
            column
        }
        ComponentDescriptor::Reference(_) => ColumnDefinition::new("value", StorageType::Text)
            .with_constraint(ColumnConstraint::Unique)
            .with_constraint(ColumnConstraint::NotNull),
        ComponentDescriptor::Boolean(_) => ColumnDefinition::new("value", StorageType::Integer)
            .with_constraint(ColumnConstraint::OneOf { values: vec![0, 1] }),
        ComponentDescriptor::Datetime(_)
        | ComponentDescriptor::Url(_)
        | ComponentDescriptor::Email(_) => {
            return Err(SynthError::UnsupportedDescriptor {
                component: name.to_string(),
                tag: descriptor.tag(),
            });
        }
    };

    Ok(TableDefinition {
        name: table_name.clone(),
        columns: vec![
            ColumnDefinition::new("id", StorageType::Text)
                .with_constraint(ColumnConstraint::PrimaryKey),
            ColumnDefinition::new("entity_id", StorageType::Text),
            value,
            ColumnDefinition::new("created_at", StorageType::Timestamp)
                .with_constraint(ColumnConstraint::DefaultNow),
            ColumnDefinition::new("updated_at", StorageType::Timestamp)
                .with_constraint(ColumnConstraint::DefaultNow),
        ],
        indexes: vec![IndexDefinition {
            name: format!("idx_{table_name}_entity_id"),
            column: "entity_id".to_string(),
        }],
    })
}

/// Synthesize a table definition for every component in the document, in
/// lexicographic component order.
pub fn synthesize_document(document: &SchemaDocument) -> Result<Vec<TableDefinition>> {
    document
        .schema
        .components
        .iter()
        .map(|(name, descriptor)| synthesize(name, descriptor))
        .collect()
}
