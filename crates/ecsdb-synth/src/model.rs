use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A synthesized table: the storage shape of one component type.
///
/// Produced fresh per synthesis run and handed straight to the store
/// adapter; applying it must be create-if-absent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub indexes: Vec<IndexDefinition>,
}

impl TableDefinition {
    /// The column named `name`, if present.
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// A single column with its abstract type and constraints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDefinition {
    pub name: String,
    pub storage_type: StorageType,
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self {
            name: name.into(),
            storage_type,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// Abstract storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Text,
    Integer,
    Timestamp,
}

/// Abstract column constraint; the store adapter renders these into
/// engine-specific clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnConstraint {
    PrimaryKey,
    NotNull,
    Unique,
    /// Minimum value length in characters.
    MinLength { length: u32 },
    /// Maximum value length in characters.
    MaxLength { length: u32 },
    /// Inclusive numeric range; both bounds optional, rendered as one
    /// combined check when both are present.
    Range { min: Option<i64>, max: Option<i64> },
    /// Value restricted to a fixed set of integers.
    OneOf { values: Vec<i64> },
    /// Default to the current timestamp at insert time.
    DefaultNow,
}

/// A secondary index over a single column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndexDefinition {
    pub name: String,
    pub column: String,
}
