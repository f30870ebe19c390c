use crate::parser::{ast::{Join, ResultColumn, ScalarExpr}, ParseError, Phase, QueryParser, TextCollector};

/// Parsed select statement: annotated select list, a from-clause (single
/// table plus an optional join chain) and an optional where expression.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub projection: Vec<ResultColumn>,
    pub table: String,
    pub joins: Vec<Join>,
    pub criteria: Option<ScalarExpr>,
}

impl SelectQuery {
    /// Cursor is just past `SELECT`; the phase machine walks the remaining
    /// clauses in order.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let mut projection = vec![];
        let mut table: Option<String> = None;
        let mut joins = vec![];
        let mut criteria = None;

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => projection = Self::parse_projection(parser)?,
                Phase::From => table = Some(Self::parse_from(parser)?),
                Phase::Joins => joins = Join::parse_all(parser)?,
                Phase::Criteria => criteria = Some(Self::parse_criteria(parser)?),
                Phase::EOF => {}
            }
        }

        let Some(table) = table else {
            return ParseError::new("Missing FROM clause", parser.position, parser).err();
        };

        Ok(SelectQuery { projection, table, joins, criteria })
    }

    fn parse_projection(parser: &mut QueryParser) -> Result<Vec<ResultColumn>, ParseError> {
        let mut columns = vec![ResultColumn::parse(parser)?];

        loop {
            parser.next_non_whitespace();
            if parser.current() == ',' {
                parser.next();
                columns.push(ResultColumn::parse(parser)?);
                continue;
            }
            break;
        }

        if !parser.check_next_phase() {
            return ParseError::new("Invalid select list", parser.position, parser).err();
        }

        Ok(columns)
    }

    fn parse_from(parser: &mut QueryParser) -> Result<String, ParseError> {
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();

        let table = TextCollector::collect(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new("Invalid from clause", parser.position, parser).err();
        }

        Ok(table)
    }

    fn parse_criteria(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        parser.jump(parser.comparers.r#where.length);

        let expr = ScalarExpr::parse(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected input after where clause", parser.position, parser).err();
        }

        Ok(expr)
    }
}
