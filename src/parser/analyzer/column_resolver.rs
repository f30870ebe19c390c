use crate::{parser::{analyzer::ResolveError, ast::ColumnRef}, schema::{ScalarType, Schema}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub table: String,
    pub column: String,
    pub ty: ScalarType,
}

pub struct ColumnResolver;

impl ColumnResolver {
    /// Map a textual reference to exactly one (table, column) pair.
    ///
    /// Unqualified references resolve against the whole schema, not just the
    /// tables the query joins: the reference is valid only when exactly one
    /// declared table carries the column.
    pub fn resolve(column: &ColumnRef, schema: &Schema) -> Result<ResolvedColumn, ResolveError> {
        match column {
            ColumnRef::WithTable { table, name } => {
                let table_def = schema.table(table)
                    .ok_or_else(|| ResolveError::UnknownTable(table.clone()))?;
                let ty = table_def.column(name).ok_or_else(|| ResolveError::UnknownColumn {
                    name: format!("{}.{}", table, name),
                    candidates: table_def.column_names(),
                })?;

                Ok(ResolvedColumn { table: table.clone(), column: name.clone(), ty })
            }
            ColumnRef::Name { name } => {
                let matches = schema.tables_with_column(name);

                match matches.len() {
                    0 => Err(ResolveError::UnknownColumn { name: name.clone(), candidates: vec![] }),
                    1 => {
                        let table = matches[0];
                        let Some(ty) = table.column(name) else {
                            return Err(ResolveError::UnknownColumn {
                                name: name.clone(),
                                candidates: table.column_names(),
                            });
                        };
                        Ok(ResolvedColumn { table: table.name.clone(), column: name.clone(), ty })
                    }
                    _ => Err(ResolveError::AmbiguousColumn {
                        name: name.clone(),
                        matches: matches.into_iter()
                            .map(|table| (table.name.clone(), name.clone()))
                            .collect(),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn sample_schema() -> Schema {
        Schema::builder()
            .table("customers", |t| {
                t.column("id", ScalarType::Int).column("name", ScalarType::Text)
            })
            .table("orders", |t| {
                t.column("id", ScalarType::Int)
                    .column("item", ScalarType::Text)
                    .column("customerid", ScalarType::Int)
                    .column("price", ScalarType::Float)
            })
            .build()
            .expect("Failed to build schema")
    }

    #[test]
    fn test_qualified_reference_resolves() {
        let schema = sample_schema();
        let column = ColumnRef::WithTable { table: "orders".to_string(), name: "price".to_string() };

        let resolved = ColumnResolver::resolve(&column, &schema).expect("Failed to resolve");

        assert_eq!(resolved.table, "orders");
        assert_eq!(resolved.column, "price");
        assert_eq!(resolved.ty, ScalarType::Float);
    }

    #[test]
    fn test_unqualified_unique_reference_resolves() {
        let schema = sample_schema();
        let column = ColumnRef::Name { name: "name".to_string() };

        let resolved = ColumnResolver::resolve(&column, &schema).expect("Failed to resolve");

        assert_eq!(resolved.table, "customers");
        assert_eq!(resolved.ty, ScalarType::Text);
    }

    #[test]
    fn test_unqualified_ambiguous_reference_fails() {
        let schema = sample_schema();
        let column = ColumnRef::Name { name: "id".to_string() };

        match ColumnResolver::resolve(&column, &schema) {
            Err(ResolveError::AmbiguousColumn { name, matches }) => {
                assert_eq!(name, "id");
                assert_eq!(matches.len(), 2);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_unknown_table() {
        let schema = sample_schema();
        let column = ColumnRef::WithTable { table: "invoices".to_string(), name: "id".to_string() };

        assert_eq!(
            ColumnResolver::resolve(&column, &schema),
            Err(ResolveError::UnknownTable("invoices".to_string()))
        );
    }

    #[test]
    fn test_unknown_column_in_table() {
        let schema = sample_schema();
        let column = ColumnRef::WithTable { table: "customers".to_string(), name: "price".to_string() };

        match ColumnResolver::resolve(&column, &schema) {
            Err(ResolveError::UnknownColumn { name, candidates }) => {
                assert_eq!(name, "customers.price");
                assert_eq!(candidates, vec!["id".to_string(), "name".to_string()]);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_unknown_column_anywhere() {
        let schema = sample_schema();
        let column = ColumnRef::Name { name: "missing".to_string() };

        match ColumnResolver::resolve(&column, &schema) {
            Err(ResolveError::UnknownColumn { name, candidates }) => {
                assert_eq!(name, "missing");
                assert!(candidates.is_empty());
            }
            _ => panic!(),
        }
    }
}
