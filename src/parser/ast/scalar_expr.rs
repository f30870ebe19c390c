use std::fmt;

use crate::parser::{ast::{BinaryOp, ColumnRef, Literal, Placeholder}, ParseError, QueryParser};

/// Uniform expression tree shared by the type checker and the renderer.
///
/// Operands are literals, placeholders and column references; interior nodes
/// are binary operations built by precedence climbing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ScalarExpr {
    Literal(Literal),
    Parameter(Placeholder),
    Column(ColumnRef),
    Binary { op: BinaryOp, left: Box<ScalarExpr>, right: Box<ScalarExpr> },
}

impl ScalarExpr {
    pub fn parse(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        Self::parse_binary(parser, 0)
    }

    fn parse_binary(parser: &mut QueryParser, min_precedence: u8) -> Result<ScalarExpr, ParseError> {
        let mut left = Self::parse_operand(parser)?;

        loop {
            parser.next_non_whitespace();

            let Some(op) = BinaryOp::check(parser) else { break };
            if op.precedence() < min_precedence {
                break;
            }
            op.consume(parser);

            let right = Self::parse_binary(parser, op.precedence() + 1)?;
            left = ScalarExpr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_operand(parser: &mut QueryParser) -> Result<ScalarExpr, ParseError> {
        parser.next_non_whitespace();

        if parser.eof() {
            return ParseError::new("Invalid scalar value", parser.position, parser).err();
        }

        if parser.current() == '(' {
            parser.next();
            let expr = Self::parse_binary(parser, 0)?;
            parser.next_non_whitespace();
            if parser.current() != ')' {
                return ParseError::new("Unbalanced parentheses", parser.position, parser).err();
            }
            parser.next();
            return Ok(expr);
        }

        if Placeholder::is_start(parser) {
            return Placeholder::parse(parser).map(ScalarExpr::Parameter);
        }
        if Literal::is_number_start(parser) {
            return Literal::parse_number(parser).map(ScalarExpr::Literal);
        }
        if Literal::is_string_start(parser) {
            return Literal::parse_string(parser).map(ScalarExpr::Literal);
        }
        if Literal::is_bool_start(parser) {
            return Literal::parse_bool(parser).map(ScalarExpr::Literal);
        }

        ColumnRef::parse(parser).map(ScalarExpr::Column)
    }
}

impl fmt::Display for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarExpr::Literal(literal) => write!(f, "{}", literal),
            ScalarExpr::Parameter(placeholder) => write!(f, "?{}", placeholder.name),
            ScalarExpr::Column(column) => write!(f, "{}", column),
            ScalarExpr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

impl fmt::Debug for ScalarExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarExpr({})", self)
    }
}
