use crate::{parser::{ast::{ColumnRef, Placeholder, TypeKeyword}, ParseError, QueryParser, TextCollector}, schema::ScalarType};

/// One annotated select-list entry: `[table.]name:type[?] [AS alias]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultColumn {
    pub column: ColumnRef,
    pub declared: ScalarType,
    pub nullable_marker: bool,
    pub alias: Option<String>,
}

impl ResultColumn {
    pub fn parse(parser: &mut QueryParser) -> Result<ResultColumn, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;

        if Placeholder::is_start(parser) {
            return ParseError::new("Placeholders are not valid in a select list", pivot, parser).err();
        }

        let column = ColumnRef::parse(parser)?;

        if parser.current() != ':' {
            return ParseError::new("Missing type annotation for result column", pivot, parser).err();
        }
        parser.next();

        let declared = TypeKeyword::parse(parser)?;

        let nullable_marker = if parser.current() == '?' {
            parser.next();
            true
        } else {
            false
        };

        parser.next_non_whitespace();
        let mut alias = None;
        if parser.comparers.alias.compare(parser) {
            parser.jump(parser.comparers.alias.length);
            parser.next_non_whitespace();
            alias = Some(TextCollector::collect(parser)?);
        }

        Ok(ResultColumn { column, declared, nullable_marker, alias })
    }

    /// The tag this entry is read back under: the alias when present,
    /// otherwise the reference text as written.
    pub fn output_tag(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.column.to_string())
    }
}
