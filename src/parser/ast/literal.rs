use std::fmt;

use ordered_float::NotNan;
use serde_json::Value;

use crate::{parser::{ParseError, QueryParser}, schema::ScalarType};

/// A value embedded directly in the statement text.
///
/// Literals still occupy a binding slot: the renderer emits a placeholder
/// for them and the stored value is bound automatically at every execution,
/// so the rendered statement never carries inlined literal text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    Float(NotNan<f64>),
    Text(String),
    Bool(bool),
}

impl Literal {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Literal::Int(_) => ScalarType::Int,
            Literal::Float(_) => ScalarType::Float,
            Literal::Text(_) => ScalarType::Text,
            Literal::Bool(_) => ScalarType::Bool,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Literal::Int(i) => Value::Number((*i).into()),
            Literal::Float(f) => serde_json::Number::from_f64(f.into_inner())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Literal::Text(s) => Value::String(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
        }
    }

    pub fn is_number_start(parser: &QueryParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() ||
            ((current == '+' || current == '-') && parser.peek(1).is_ascii_digit())
    }

    pub fn is_string_start(parser: &QueryParser) -> bool {
        matches!(parser.current(), '"' | '\'')
    }

    pub fn is_bool_start(parser: &QueryParser) -> bool {
        parser.comparers.b_true.compare(parser) || parser.comparers.b_false.compare(parser)
    }

    pub fn parse_number(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if !Literal::is_number_start(parser) {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        if parser.current() == '+' || parser.current() == '-' {
            parser.next();
        }

        let mut is_float = false;
        while !parser.eof() && (parser.current().is_ascii_digit() || parser.current() == '.') {
            if parser.current() == '.' {
                is_float = true;
            }
            parser.next();
        }

        let number = parser.text_from_pivot(pivot);
        let number = match is_float {
            true => {
                let value = number.parse::<f64>()
                    .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                let value = NotNan::new(value)
                    .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
                Literal::Float(value)
            }
            false => Literal::Int(number.parse::<i64>()
                .map_err(|_| ParseError::new("Invalid number", pivot, parser))?),
        };

        Ok(number)
    }

    pub fn parse_string(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        let mut pivot = parser.position;

        if !Literal::is_string_start(parser) {
            return ParseError::new("Invalid string value", pivot, parser).err();
        }
        let delimiter = parser.current();
        parser.next();
        pivot = parser.position;

        while !parser.eof() && parser.current() != delimiter {
            if parser.current() == '\r' || parser.current() == '\n' {
                return ParseError::new("Invalid string", pivot, parser).err();
            }

            parser.next();
        }
        if parser.eof() {
            return ParseError::new("Unterminated string", pivot, parser).err();
        }

        let text = parser.text_from_pivot(pivot);
        parser.next();

        Ok(Literal::Text(text))
    }

    pub fn parse_bool(parser: &mut QueryParser) -> Result<Literal, ParseError> {
        if parser.comparers.b_true.compare(parser) {
            parser.jump(parser.comparers.b_true.length);
            return Ok(Literal::Bool(true));
        }

        if parser.comparers.b_false.compare(parser) {
            parser.jump(parser.comparers.b_false.length);
            return Ok(Literal::Bool(false));
        }

        ParseError::new("Invalid boolean value", parser.position, parser).err()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Text(s) => write!(f, "'{}'", s),
            Literal::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({})", self)
    }
}
