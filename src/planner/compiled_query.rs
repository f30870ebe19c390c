use tracing::debug;

use crate::{
    parser::{analyzer::AnalysisContext, ast::Statement},
    planner::{BindingPlan, CompileError, RowDescriptor, StatementRenderer},
    schema::Schema,
};

/// The three immutable artifacts of a successful compilation. Safe to share
/// and reuse across any number of executions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Engine-executable text with positional placeholders.
    pub statement: String,
    pub binding_plan: BindingPlan,
    pub row_descriptor: RowDescriptor,
}

/// Compile one annotated statement against the schema.
///
/// Parsing, resolution and type checking all happen here, ahead of any
/// execution; on failure no partial artifact escapes.
pub fn compile(schema: &Schema, text: &str) -> Result<CompiledQuery, CompileError> {
    let statement = Statement::try_from(text)?;
    let analyzed = AnalysisContext::analyze(&statement, schema)?;

    let binding_plan = BindingPlan::from_analysis(&analyzed);
    let row_descriptor = RowDescriptor::from_analysis(&analyzed);
    let rendered = StatementRenderer::render(&statement);

    debug!(
        statement = %rendered,
        slots = binding_plan.len(),
        fields = row_descriptor.len(),
        "compiled statement"
    );

    Ok(CompiledQuery {
        statement: rendered,
        binding_plan,
        row_descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::analyzer::ResolveError,
        schema::ScalarType,
    };

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
    fn test_compile_produces_all_three_artifacts() {
        let schema = sample_schema();

        let query = compile(
            &schema,
            "SELECT orders.id:int, name:string, item:string?, price:double \
             FROM orders JOIN customers ON customers.id = customerid \
             WHERE price > ?min_price:double",
        )
        .expect("Failed to compile");

        assert_eq!(
            query.statement,
            "SELECT orders.id, name, item, price FROM orders \
             JOIN customers ON (customers.id = customerid) WHERE (price > ?)"
        );

        let named: Vec<(&str, ScalarType)> = query.binding_plan.named_slots().collect();
        assert_eq!(named, vec![("min_price", ScalarType::Float)]);

        let tags: Vec<&str> = query.row_descriptor.fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, vec!["orders.id", "name", "item", "price"]);
    }

    #[test]
    fn test_compile_is_idempotent() {
        let schema = sample_schema();
        let text = "SELECT price:double FROM orders WHERE price > ?min:double AND item = 'Phone'";

        let first = compile(&schema, text).expect("Failed to compile");
        let second = compile(&schema, text).expect("Failed to compile");

        assert_eq!(first, second);
    }

    #[test]
    fn test_binding_order_follows_first_occurrence() {
        let schema = sample_schema();

        let forward = compile(
            &schema,
            "SELECT price:double FROM orders WHERE price > ?a:double AND price < ?b:double",
        )
        .expect("Failed to compile");
        let reversed = compile(
            &schema,
            "SELECT price:double FROM orders WHERE price < ?b:double AND price > ?a:double",
        )
        .expect("Failed to compile");

        let forward_names: Vec<&str> = forward.binding_plan.named_slots().map(|(n, _)| n).collect();
        let reversed_names: Vec<&str> = reversed.binding_plan.named_slots().map(|(n, _)| n).collect();

        assert_eq!(forward_names, vec!["a", "b"]);
        assert_eq!(reversed_names, vec!["b", "a"]);
    }

    #[test]
    fn test_compile_syntax_error() {
        let schema = sample_schema();

        let result = compile(&schema, "SELECT id FROM customers");

        assert!(matches!(result, Err(CompileError::Parse(_))));
    }

    #[test]
    fn test_compile_resolution_error() {
        let schema = sample_schema();

        let result = compile(&schema, "SELECT id:int FROM invoices");

        assert_eq!(
            result,
            Err(CompileError::Resolve(ResolveError::UnknownTable("invoices".to_string())))
        );
    }

    #[test]
    fn test_compile_insert_has_empty_descriptor() {
        let schema = sample_schema();

        let query = compile(
            &schema,
            "INSERT INTO customers (id, name) VALUES (?id:int, ?name:string)",
        )
        .expect("Failed to compile");

        assert!(query.row_descriptor.is_empty());
        assert_eq!(query.binding_plan.len(), 2);
        assert_eq!(query.statement, "INSERT INTO customers (id, name) VALUES (?, ?)");
    }
}
