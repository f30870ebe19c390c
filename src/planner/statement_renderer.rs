use crate::parser::ast::{InsertQuery, ResultColumn, ScalarExpr, SelectQuery, Statement};

/// Serializes a validated statement into engine-executable text.
///
/// Annotations are stripped; every placeholder and literal is rendered as a
/// positional `?` marker, in exactly the order the binding plan expects
/// (select list, joins, where / insert value list). Performs no validation.
pub struct StatementRenderer;

impl StatementRenderer {
    pub fn render(statement: &Statement) -> String {
        match statement {
            Statement::Select(query) => Self::render_select(query),
            Statement::Insert(query) => Self::render_insert(query),
        }
    }

    fn render_select(query: &SelectQuery) -> String {
        let projection: Vec<String> = query.projection.iter()
            .map(Self::render_result_column)
            .collect();

        let mut statement = format!("SELECT {} FROM {}", projection.join(", "), query.table);

        for join in &query.joins {
            statement.push_str(&format!(
                " {} {} ON {}",
                join.kind.keyword(),
                join.table,
                Self::render_expr(&join.on)
            ));
        }

        if let Some(criteria) = &query.criteria {
            statement.push_str(&format!(" WHERE {}", Self::render_expr(criteria)));
        }

        statement
    }

    fn render_insert(query: &InsertQuery) -> String {
        let values: Vec<String> = query.values.iter().map(Self::render_expr).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            query.table,
            query.columns.join(", "),
            values.join(", ")
        )
    }

    fn render_result_column(column: &ResultColumn) -> String {
        match &column.alias {
            Some(alias) => format!("{} AS {}", column.column, alias),
            None => column.column.to_string(),
        }
    }

    fn render_expr(expr: &ScalarExpr) -> String {
        match expr {
            ScalarExpr::Literal(_) | ScalarExpr::Parameter(_) => "?".to_string(),
            ScalarExpr::Column(column) => column.to_string(),
            ScalarExpr::Binary { op, left, right } => format!(
                "({} {} {})",
                Self::render_expr(left),
                op,
                Self::render_expr(right)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let statement = Statement::try_from(text).expect("Failed to parse statement");
        StatementRenderer::render(&statement)
    }

    #[test]
    fn test_render_select_strips_annotations() {
        let rendered = render("SELECT orders.id:int, name:string, item:string?, price:double FROM orders");

        assert_eq!(rendered, "SELECT orders.id, name, item, price FROM orders");
    }

    #[test]
    fn test_render_select_with_join_and_where() {
        let rendered = render(
            "SELECT orders.id:int, price:double \
             FROM orders JOIN customers ON customers.id = customerid \
             WHERE price > ?min_price:double",
        );

        assert_eq!(
            rendered,
            "SELECT orders.id, price FROM orders JOIN customers ON (customers.id = customerid) \
             WHERE (price > ?)"
        );
    }

    #[test]
    fn test_render_alias() {
        let rendered = render("SELECT customers.name:string AS customer FROM customers");

        assert_eq!(rendered, "SELECT customers.name AS customer FROM customers");
    }

    #[test]
    fn test_render_literal_as_placeholder() {
        let rendered = render("SELECT price:double FROM orders WHERE price > 1400.0");

        assert_eq!(rendered, "SELECT price FROM orders WHERE (price > ?)");
    }

    #[test]
    fn test_render_left_join_keyword() {
        let rendered = render(
            "SELECT price:double FROM orders LEFT JOIN customers ON customers.id = customerid",
        );

        assert!(rendered.contains("LEFT JOIN customers ON (customers.id = customerid)"));
    }

    #[test]
    fn test_render_nested_expression() {
        let rendered = render(
            "SELECT price:double FROM orders \
             WHERE price > ?min:double AND (item = ?a:string OR item = ?b:string)",
        );

        assert!(rendered.ends_with("WHERE ((price > ?) AND ((item = ?) OR (item = ?)))"));
    }

    #[test]
    fn test_render_insert() {
        let rendered = render(
            "INSERT INTO orders (item, customerid, price) \
             VALUES (?item:string, ?customerid:int, ?price:double);",
        );

        assert_eq!(rendered, "INSERT INTO orders (item, customerid, price) VALUES (?, ?, ?)");
    }
}
