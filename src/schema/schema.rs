use std::fmt;

use indexmap::IndexMap;

use crate::schema::{ScalarType, Table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateTable(String),
    DuplicateColumn { table: String, column: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateTable(name) => write!(f, "duplicate table '{}'", name),
            SchemaError::DuplicateColumn { table, column } => {
                write!(f, "duplicate column '{}' in table '{}'", column, table)
            }
        }
    }
}

/// Immutable declaration of tables and their typed columns.
///
/// Built once, before any query compilation, and shared by reference with
/// every query compiled against it. Tables and columns keep declaration
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Every declared table carrying a column with this tag, in declaration
    /// order. An unqualified reference is resolvable only when this returns
    /// exactly one table.
    pub fn tables_with_column(&self, column: &str) -> Vec<&Table> {
        self.tables.values().filter(|t| t.has_column(column)).collect()
    }
}

/// Fluent schema construction; duplicate tags surface as a single
/// `SchemaError` at `build` time.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    tables: IndexMap<String, Table>,
    error: Option<SchemaError>,
}

impl SchemaBuilder {
    pub fn table(mut self, name: &str, build: impl FnOnce(TableBuilder) -> TableBuilder) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.tables.contains_key(name) {
            self.error = Some(SchemaError::DuplicateTable(name.to_string()));
            return self;
        }
        let built = build(TableBuilder { table: Table::new(name), error: None });
        match built.error {
            Some(error) => self.error = Some(error),
            None => {
                self.tables.insert(name.to_string(), built.table);
            }
        }
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(Schema { tables: self.tables }),
        }
    }
}

#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
    error: Option<SchemaError>,
}

impl TableBuilder {
    pub fn column(mut self, name: &str, ty: ScalarType) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(error) = self.table.add_column(name, ty) {
            self.error = Some(error);
        }
        self
    }
}
