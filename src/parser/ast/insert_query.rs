use crate::parser::{ast::ScalarExpr, ParseError, QueryParser, TextCollector};

/// Parsed insert statement: target table, explicit column list and one
/// value list of scalar expressions (placeholders or literals).
#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<ScalarExpr>,
}

impl InsertQuery {
    /// Cursor is just past `INSERT INTO`.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();
        let table = TextCollector::collect(parser)?;

        parser.next_non_whitespace();
        if parser.current() != '(' {
            return ParseError::new("Missing insert column list", parser.position, parser).err();
        }
        parser.next();

        let mut columns = vec![];
        loop {
            parser.next_non_whitespace();
            columns.push(TextCollector::collect(parser)?);
            parser.next_non_whitespace();
            match parser.current() {
                ',' => parser.next(),
                ')' => {
                    parser.next();
                    break;
                }
                _ => return ParseError::new("Invalid insert column list", parser.position, parser).err(),
            }
        }

        parser.next_non_whitespace();
        if !parser.comparers.values.compare(parser) {
            return ParseError::new("Missing VALUES clause", parser.position, parser).err();
        }
        parser.jump(parser.comparers.values.length);

        parser.next_non_whitespace();
        if parser.current() != '(' {
            return ParseError::new("Missing value list", parser.position, parser).err();
        }
        parser.next();

        let mut values = vec![];
        loop {
            values.push(ScalarExpr::parse(parser)?);
            parser.next_non_whitespace();
            match parser.current() {
                ',' => parser.next(),
                ')' => {
                    parser.next();
                    break;
                }
                _ => return ParseError::new("Invalid value list", parser.position, parser).err(),
            }
        }

        parser.next_non_whitespace();
        if parser.current() == ';' {
            parser.next();
            parser.next_non_whitespace();
        }
        if !parser.eof() {
            return ParseError::new("Unexpected input after statement", parser.position, parser).err();
        }

        Ok(InsertQuery { table, columns, values })
    }
}
