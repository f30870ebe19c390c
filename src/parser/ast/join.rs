use crate::parser::{ast::ScalarExpr, ParseError, Phase, QueryParser, TextCollector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn parse(parser: &mut QueryParser) -> Result<JoinKind, ParseError> {
        if parser.comparers.inner_join.compare(parser) {
            parser.jump(parser.comparers.inner_join.length);
            return Ok(JoinKind::Inner);
        }

        if parser.comparers.left_join.compare(parser) {
            parser.jump(parser.comparers.left_join.length);
            return Ok(JoinKind::Left);
        }

        if parser.comparers.right_join.compare(parser) {
            parser.jump(parser.comparers.right_join.length);
            return Ok(JoinKind::Right);
        }

        if parser.comparers.full_join.compare(parser) {
            parser.jump(parser.comparers.full_join.length);
            return Ok(JoinKind::Full);
        }

        if parser.comparers.join.compare(parser) {
            parser.jump(parser.comparers.join.length);
            return Ok(JoinKind::Inner);
        }

        ParseError::new("Invalid join type", parser.position, parser).err()
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
        }
    }
}

/// One joined table with its ON expression. A chain of joins forms the
/// left-deep join tree of the from-clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub on: ScalarExpr,
}

impl Join {
    pub fn parse_all(parser: &mut QueryParser) -> Result<Vec<Join>, ParseError> {
        let mut joins: Vec<Join> = vec![];

        while parser.phase == Phase::Joins {
            let kind = JoinKind::parse(parser)?;

            parser.next_non_whitespace();
            let table = TextCollector::collect(parser)?;

            parser.next_non_whitespace();
            if !parser.comparers.on.compare(parser) {
                return ParseError::new("Missing ON clause", parser.position, parser).err();
            }
            parser.jump(parser.comparers.on.length);

            let on = ScalarExpr::parse(parser)?;

            joins.push(Join { kind, table, on });

            if !parser.check_next_phase() {
                return ParseError::new("Invalid join clause", parser.position, parser).err();
            }
        }

        Ok(joins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_joins(text: &str) -> Vec<Join> {
        let mut parser = QueryParser::new(text);
        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Joins);
        Join::parse_all(&mut parser).expect("Failed to parse joins")
    }

    #[test]
    pub fn test_bare_join_is_inner() {
        let result = parse_joins("JOIN customers ON customers.id = customerid");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, JoinKind::Inner);
        assert_eq!(result[0].table, "customers");
        assert_eq!(result[0].on.to_string(), "(customers.id = customerid)");
    }

    #[test]
    pub fn test_inner_join_keyword() {
        let result = parse_joins("INNER JOIN customers ON customers.id = customerid");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, JoinKind::Inner);
    }

    #[test]
    pub fn test_all_join_kinds() {
        let text = r#"
        INNER JOIN tableA ON tableA.columnA = tableB.columnA
        LEFT JOIN tableC ON tableC.columnB = tableA.columnB
        RIGHT JOIN tableD ON tableD.columnB = tableC.columnB
        FULL JOIN tableE ON tableE.columnB = tableA.columnB
        "#;

        let result = parse_joins(text);

        assert_eq!(result.len(), 4);

        let expect_names = ["tableA", "tableC", "tableD", "tableE"];
        let expect_kinds = [JoinKind::Inner, JoinKind::Left, JoinKind::Right, JoinKind::Full];

        for (i, item) in result.iter().enumerate() {
            assert_eq!(item.table, expect_names[i]);
            assert_eq!(item.kind, expect_kinds[i]);
        }
    }

    #[test]
    pub fn test_join_with_compound_on() {
        let result = parse_joins("JOIN b ON a.x = b.x AND a.y = b.y");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].on.to_string(), "((a.x = b.x) AND (a.y = b.y))");
    }

    #[test]
    pub fn test_join_missing_on() {
        let mut parser = QueryParser::new("JOIN customers WHERE a = b");
        assert!(parser.check_next_phase());

        let result = Join::parse_all(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Missing ON clause"),
        }
    }
}
