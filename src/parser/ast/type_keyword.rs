use crate::{parser::{ParseError, QueryParser, TextCollector}, schema::ScalarType};

pub struct TypeKeyword;

impl TypeKeyword {
    /// Parse the type keyword of an annotation, mapping it to the scalar set.
    pub fn parse(parser: &mut QueryParser) -> Result<ScalarType, ParseError> {
        let pivot = parser.position;
        let word = TextCollector::collect(parser)?;

        ScalarType::from_keyword(&word)
            .ok_or_else(|| ParseError::new("Unknown type keyword", pivot, parser))
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::TypeKeyword, QueryParser}, schema::ScalarType};

    #[test]
    pub fn test_type_keyword() {
        let mut parser = QueryParser::new("double ");

        let result = TypeKeyword::parse(&mut parser).expect("Failed to parse type keyword");

        assert_eq!(result, ScalarType::Float);
    }

    #[test]
    pub fn test_type_keyword_stops_at_marker() {
        let mut parser = QueryParser::new("string?");

        let result = TypeKeyword::parse(&mut parser).expect("Failed to parse type keyword");

        assert_eq!(result, ScalarType::Text);
        assert_eq!(parser.current(), '?');
    }

    #[test]
    pub fn test_type_keyword_unknown() {
        let mut parser = QueryParser::new("varchar");

        let result = TypeKeyword::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Unknown type keyword");
                assert_eq!(err.start, 0);
            }
        }
    }
}
