use crate::parser::{ast::{InsertQuery, SelectQuery}, ParseError, QueryParser};

/// A parsed annotated statement. Parsing is pure and all-or-nothing: any
/// malformed fragment fails the whole statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectQuery),
    Insert(InsertQuery),
}

impl Statement {
    pub fn parse(parser: &mut QueryParser) -> Result<Statement, ParseError> {
        parser.next_non_whitespace();

        if parser.comparers.select.compare(parser) {
            parser.jump(parser.comparers.select.length);
            return SelectQuery::parse(parser).map(Statement::Select);
        }

        if parser.comparers.insert_into.compare(parser) {
            parser.jump(parser.comparers.insert_into.length);
            return InsertQuery::parse(parser).map(Statement::Insert);
        }

        ParseError::new("Expected SELECT or INSERT INTO", parser.position, parser).err()
    }
}

impl TryFrom<&str> for Statement {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        Statement::parse(&mut parser)
    }
}
