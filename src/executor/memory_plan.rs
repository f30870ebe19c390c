use crate::parser::{ast::{BinaryOp, JoinKind}, ParseError, Phase, QueryParser, TextCollector};

/// Expression in the rendered dialect: column references, positional `?`
/// markers and binary operations. Placeholders are numbered left to right,
/// matching the binding plan.
#[derive(Debug, Clone, PartialEq)]
pub enum MemExpr {
    Column { table: Option<String>, name: String },
    Placeholder(usize),
    Binary { op: BinaryOp, left: Box<MemExpr>, right: Box<MemExpr> },
}

impl MemExpr {
    fn parse(parser: &mut QueryParser, placeholders: &mut usize) -> Result<MemExpr, ParseError> {
        Self::parse_binary(parser, 0, placeholders)
    }

    fn parse_binary(
        parser: &mut QueryParser,
        min_precedence: u8,
        placeholders: &mut usize,
    ) -> Result<MemExpr, ParseError> {
        let mut left = Self::parse_operand(parser, placeholders)?;

        loop {
            parser.next_non_whitespace();

            let Some(op) = BinaryOp::check(parser) else { break };
            if op.precedence() < min_precedence {
                break;
            }
            op.consume(parser);

            let right = Self::parse_binary(parser, op.precedence() + 1, placeholders)?;
            left = MemExpr::Binary { op, left: Box::new(left), right: Box::new(right) };
        }

        Ok(left)
    }

    fn parse_operand(parser: &mut QueryParser, placeholders: &mut usize) -> Result<MemExpr, ParseError> {
        parser.next_non_whitespace();

        if parser.current() == '(' {
            parser.next();
            let expr = Self::parse_binary(parser, 0, placeholders)?;
            parser.next_non_whitespace();
            if parser.current() != ')' {
                return ParseError::new("Unbalanced parentheses", parser.position, parser).err();
            }
            parser.next();
            return Ok(expr);
        }

        if parser.current() == '?' {
            parser.next();
            let expr = MemExpr::Placeholder(*placeholders);
            *placeholders += 1;
            return Ok(expr);
        }

        let first = TextCollector::collect(parser)?;
        if parser.current() == '.' {
            parser.next();
            let name = TextCollector::collect(parser)?;
            return Ok(MemExpr::Column { table: Some(first), name });
        }

        Ok(MemExpr::Column { table: None, name: first })
    }
}

/// One projected output of a rendered select list.
#[derive(Debug, Clone, PartialEq)]
pub struct MemOutput {
    pub table: Option<String>,
    pub name: String,
}

/// The memory engine's parsed form of a rendered statement. This is the
/// dialect the renderer emits, nothing more: annotations are gone and every
/// value is a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum MemPlan {
    Select {
        outputs: Vec<MemOutput>,
        table: String,
        joins: Vec<(String, MemExpr)>,
        filter: Option<MemExpr>,
        placeholders: usize,
    },
    Insert {
        table: String,
        columns: Vec<String>,
        placeholders: usize,
    },
}

impl MemPlan {
    pub fn placeholder_count(&self) -> usize {
        match self {
            MemPlan::Select { placeholders, .. } => *placeholders,
            MemPlan::Insert { placeholders, .. } => *placeholders,
        }
    }

    pub fn parse(statement: &str) -> Result<MemPlan, ParseError> {
        let mut parser = QueryParser::new(statement);
        parser.next_non_whitespace();

        if parser.comparers.select.compare(&parser) {
            parser.jump(parser.comparers.select.length);
            return Self::parse_select(&mut parser);
        }

        if parser.comparers.insert_into.compare(&parser) {
            parser.jump(parser.comparers.insert_into.length);
            return Self::parse_insert(&mut parser);
        }

        ParseError::new("Unsupported statement", parser.position, &parser).err()
    }

    fn parse_select(parser: &mut QueryParser) -> Result<MemPlan, ParseError> {
        let mut placeholders = 0;

        let mut outputs = vec![];
        loop {
            parser.next_non_whitespace();
            let first = TextCollector::collect(parser)?;
            let output = if parser.current() == '.' {
                parser.next();
                MemOutput { table: Some(first), name: TextCollector::collect(parser)? }
            } else {
                MemOutput { table: None, name: first }
            };
            outputs.push(output);

            parser.next_non_whitespace();
            if parser.comparers.alias.compare(parser) {
                // aliases do not matter here; column access is positional
                parser.jump(parser.comparers.alias.length);
                parser.next_non_whitespace();
                TextCollector::collect(parser)?;
                parser.next_non_whitespace();
            }

            if parser.current() == ',' {
                parser.next();
                continue;
            }
            break;
        }

        if !parser.check_next_phase() || parser.phase != Phase::From {
            return ParseError::new("Missing FROM clause", parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();
        let table = TextCollector::collect(parser)?;

        let mut joins = vec![];
        let mut filter = None;

        loop {
            if !parser.check_next_phase() {
                return ParseError::new("Invalid statement", parser.position, parser).err();
            }

            match parser.phase {
                Phase::EOF => break,
                Phase::Joins => {
                    let kind = JoinKind::parse(parser)?;
                    if kind != JoinKind::Inner {
                        return ParseError::new("Unsupported join type", parser.position, parser).err();
                    }

                    parser.next_non_whitespace();
                    let join_table = TextCollector::collect(parser)?;

                    parser.next_non_whitespace();
                    if !parser.comparers.on.compare(parser) {
                        return ParseError::new("Missing ON clause", parser.position, parser).err();
                    }
                    parser.jump(parser.comparers.on.length);

                    let on = MemExpr::parse(parser, &mut placeholders)?;
                    joins.push((join_table, on));
                }
                Phase::Criteria => {
                    parser.jump(parser.comparers.r#where.length);
                    filter = Some(MemExpr::parse(parser, &mut placeholders)?);
                }
                _ => return ParseError::new("Invalid statement", parser.position, parser).err(),
            }
        }

        Ok(MemPlan::Select { outputs, table, joins, filter, placeholders })
    }

    fn parse_insert(parser: &mut QueryParser) -> Result<MemPlan, ParseError> {
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

        let mut placeholders = 0;
        loop {
            parser.next_non_whitespace();
            if parser.current() != '?' {
                return ParseError::new("Expected placeholder", parser.position, parser).err();
            }
            parser.next();
            placeholders += 1;

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
        if !parser.eof() {
            return ParseError::new("Unexpected input after statement", parser.position, parser).err();
        }

        Ok(MemPlan::Insert { table, columns, placeholders })
    }
}
