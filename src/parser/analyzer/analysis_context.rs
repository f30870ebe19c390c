use tracing::trace;

use crate::{
    parser::{
        analyzer::{
            AnalyzedStatement, ColumnResolver, ExprResolver, ResolveError, SelectedColumn,
        },
        ast::{InsertQuery, SelectQuery, Statement},
    },
    schema::Schema,
};

/// Walks a parsed statement against the schema, validating every reference
/// and accumulating the analyzed sets. This is the single authority that may
/// reject a query; the plan generators and the renderer assume it succeeded.
pub struct AnalysisContext<'a> {
    pub schema: &'a Schema,
    pub analyzed: AnalyzedStatement,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema, analyzed: AnalyzedStatement::default() }
    }

    pub fn analyze(statement: &Statement, schema: &'a Schema) -> Result<AnalyzedStatement, ResolveError> {
        let mut ctx = Self::new(schema);

        match statement {
            Statement::Select(query) => ctx.analyze_select(query)?,
            Statement::Insert(query) => ctx.analyze_insert(query)?,
        }

        trace!(
            tables = ctx.analyzed.referenced_tables.len(),
            selected = ctx.analyzed.selected.len(),
            parameters = ctx.analyzed.parameters.len(),
            "statement analyzed"
        );

        Ok(ctx.analyzed)
    }

    /// Insert into the referenced set, validating existence. Re-referencing
    /// the same table is idempotent.
    fn reference_table(&mut self, name: &str) -> Result<(), ResolveError> {
        if self.schema.table(name).is_none() {
            return Err(ResolveError::UnknownTable(name.to_string()));
        }
        self.analyzed.referenced_tables.insert(name.to_string());
        Ok(())
    }

    /// Clause order mirrors the renderer: select list, joins, where. Binding
    /// slots therefore accumulate in the same order the rendered statement
    /// expects them.
    fn analyze_select(&mut self, query: &SelectQuery) -> Result<(), ResolveError> {
        self.reference_table(&query.table)?;
        for join in &query.joins {
            self.reference_table(&join.table)?;
        }

        for item in &query.projection {
            let resolved = ColumnResolver::resolve(&item.column, self.schema)?;

            if item.declared != resolved.ty {
                return Err(ResolveError::AnnotationTypeMismatch {
                    name: item.column.to_string(),
                    declared: item.declared,
                    actual: resolved.ty,
                });
            }

            if self.analyzed.selected.iter()
                .any(|s| s.table == resolved.table && s.column == resolved.column) {
                return Err(ResolveError::ColumnAlreadySelected {
                    table: resolved.table,
                    name: resolved.column,
                });
            }

            if let Some(alias) = &item.alias {
                if !self.analyzed.aliases.insert(alias.clone()) {
                    return Err(ResolveError::DuplicateAlias(alias.clone()));
                }
            }

            self.analyzed.selected.push(SelectedColumn {
                tag: item.output_tag(),
                table: resolved.table,
                column: resolved.column,
                ty: resolved.ty,
            });
        }

        for join in &query.joins {
            ExprResolver::resolve(&join.on, self)?;
        }

        if let Some(criteria) = &query.criteria {
            ExprResolver::resolve(criteria, self)?;
        }

        Ok(())
    }

    fn analyze_insert(&mut self, query: &InsertQuery) -> Result<(), ResolveError> {
        let schema = self.schema;
        let Some(table_def) = schema.table(&query.table) else {
            return Err(ResolveError::UnknownTable(query.table.clone()));
        };
        self.analyzed.referenced_tables.insert(query.table.clone());

        let mut column_types = Vec::with_capacity(query.columns.len());
        for column in &query.columns {
            let Some(ty) = table_def.column(column) else {
                return Err(ResolveError::UnknownColumn {
                    name: format!("{}.{}", query.table, column),
                    candidates: table_def.column_names(),
                });
            };
            if query.columns.iter().filter(|c| *c == column).count() > 1 {
                return Err(ResolveError::ColumnAlreadySelected {
                    table: query.table.clone(),
                    name: column.clone(),
                });
            }
            column_types.push(ty);
        }

        if query.values.len() != query.columns.len() {
            return Err(ResolveError::ValueCountMismatch {
                expected: query.columns.len(),
                got: query.values.len(),
            });
        }

        for ((column, expected), value) in query.columns.iter().zip(column_types).zip(&query.values) {
            if let Some(column_ref) = ExprResolver::find_column_ref(value) {
                return Err(ResolveError::ColumnInValues(column_ref.to_string()));
            }

            let got = ExprResolver::resolve(value, self)?;
            if got != expected {
                return Err(ResolveError::ValueTypeMismatch {
                    column: column.clone(),
                    expected,
                    got,
                });
            }
        }

        Ok(())
    }
}
