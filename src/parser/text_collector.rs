use crate::parser::{ParseError, QueryParser};

pub struct TextCollector;

impl TextCollector {
    /// Collect an identifier at the cursor: letters, digits and underscores,
    /// not starting with a digit. Stops at the first non-identifier
    /// character, which stays at the cursor for the caller.
    pub fn collect(parser: &mut QueryParser) -> Result<String, ParseError> {
        let pivot = parser.position;

        if parser.current().is_ascii_digit() {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        while !parser.eof() && (parser.current().is_ascii_alphanumeric() || parser.current() == '_') {
            parser.next();
        }

        let text = parser.text_from_pivot(pivot);
        if text.is_empty() {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QueryParser, TextCollector};

    #[test]
    pub fn test_collect() {
        let mut parser = QueryParser::new("text ");

        let result = TextCollector::collect(&mut parser).expect("Failed to collect identifier");

        assert_eq!(result, "text");
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_collect_eof() {
        let mut parser = QueryParser::new("text");

        let result = TextCollector::collect(&mut parser).expect("Failed to collect identifier");

        assert_eq!(result, "text");
        assert!(parser.eof());
    }

    #[test]
    pub fn test_collect_snake_case() {
        let mut parser = QueryParser::new("column_01,");

        let result = TextCollector::collect(&mut parser).expect("Failed to collect identifier");

        assert_eq!(result, "column_01");
        assert_eq!(parser.current(), ',');
    }

    #[test]
    pub fn test_collect_stops_at_annotation() {
        let mut parser = QueryParser::new("price:double");

        let result = TextCollector::collect(&mut parser).expect("Failed to collect identifier");

        assert_eq!(result, "price");
        assert_eq!(parser.current(), ':');
    }

    #[test]
    pub fn test_collect_error_digit_start() {
        let mut parser = QueryParser::new("9column");

        let result = TextCollector::collect(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 0);
                assert_eq!(err.text, "9");
            }
        }
    }

    #[test]
    pub fn test_collect_error_empty() {
        let mut parser = QueryParser::new("*");

        let result = TextCollector::collect(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.start, 0);
            }
        }
    }
}
