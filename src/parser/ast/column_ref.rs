use std::fmt;

use crate::parser::{ParseError, QueryParser, TextCollector};

/// An unqualified or table-qualified column reference.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    Name { name: String },
    WithTable { table: String, name: String },
}

impl ColumnRef {
    pub fn parse(parser: &mut QueryParser) -> Result<ColumnRef, ParseError> {
        let pivot = parser.position;
        let first = TextCollector::collect(parser)?;

        if parser.current() != '.' {
            return Ok(ColumnRef::Name { name: first });
        }

        parser.next();
        let name = TextCollector::collect(parser)?;

        if parser.current() == '.' {
            return ParseError::new("Invalid column reference", pivot, parser).err();
        }

        Ok(ColumnRef::WithTable { table: first, name })
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnRef::Name { name } => name,
            ColumnRef::WithTable { name, .. } => name,
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name { name } => write!(f, "{}", name),
            ColumnRef::WithTable { table, name } => write!(f, "{}.{}", table, name),
        }
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Name { .. } => write!(f, "ColumnRef::Name({})", self),
            ColumnRef::WithTable { .. } => write!(f, "ColumnRef::WithTable({})", self),
        }
    }
}
