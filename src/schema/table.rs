use indexmap::IndexMap;

use crate::schema::{ScalarType, SchemaError};

/// A declared table: a unique tag plus an ordered set of typed columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: IndexMap<String, ScalarType>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: IndexMap::new() }
    }

    pub fn column(&self, name: &str) -> Option<ScalarType> {
        self.columns.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    pub(crate) fn add_column(&mut self, name: &str, ty: ScalarType) -> Result<(), SchemaError> {
        if self.columns.insert(name.to_string(), ty).is_some() {
            return Err(SchemaError::DuplicateColumn {
                table: self.name.clone(),
                column: name.to_string(),
            });
        }
        Ok(())
    }
}
