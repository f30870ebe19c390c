use crate::{parser::{ast::TypeKeyword, ParseError, QueryParser, TextCollector}, schema::ScalarType};

/// A named, typed parameter annotation: `?name:type` or `?name:type?`.
///
/// The trailing `?` marker is accepted and recorded but has no effect on the
/// compiled artifacts; result values are always may-be-absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub name: String,
    pub ty: ScalarType,
    pub nullable_marker: bool,
}

impl Placeholder {
    pub fn is_start(parser: &QueryParser) -> bool {
        parser.current() == '?'
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Placeholder, ParseError> {
        let pivot = parser.position;

        if !Placeholder::is_start(parser) {
            return ParseError::new("Invalid placeholder", pivot, parser).err();
        }
        parser.next();

        let name = TextCollector::collect(parser)?;

        if parser.current() != ':' {
            return ParseError::new("Missing type annotation for placeholder", pivot, parser).err();
        }
        parser.next();

        let ty = TypeKeyword::parse(parser)?;

        let nullable_marker = if parser.current() == '?' {
            parser.next();
            true
        } else {
            false
        };

        Ok(Placeholder { name, ty, nullable_marker })
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::Placeholder, QueryParser}, schema::ScalarType};

    #[test]
    pub fn test_placeholder() {
        let mut parser = QueryParser::new("?min_price:double");

        let result = Placeholder::parse(&mut parser).expect("Failed to parse placeholder");

        assert_eq!(result.name, "min_price");
        assert_eq!(result.ty, ScalarType::Float);
        assert!(!result.nullable_marker);
    }

    #[test]
    pub fn test_placeholder_with_marker() {
        let mut parser = QueryParser::new("?item:string?");

        let result = Placeholder::parse(&mut parser).expect("Failed to parse placeholder");

        assert_eq!(result.name, "item");
        assert_eq!(result.ty, ScalarType::Text);
        assert!(result.nullable_marker);
    }

    #[test]
    pub fn test_placeholder_stops_at_delimiter() {
        let mut parser = QueryParser::new("?id:int,");

        let result = Placeholder::parse(&mut parser).expect("Failed to parse placeholder");

        assert_eq!(result.name, "id");
        assert_eq!(parser.current(), ',');
    }

    #[test]
    pub fn test_placeholder_missing_type() {
        let mut parser = QueryParser::new("?min_price");

        let result = Placeholder::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Missing type annotation for placeholder"),
        }
    }

    #[test]
    pub fn test_placeholder_unknown_type() {
        let mut parser = QueryParser::new("?min_price:decimal");

        assert!(Placeholder::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_placeholder_missing_name() {
        let mut parser = QueryParser::new("? :int");

        assert!(Placeholder::parse(&mut parser).is_err());
    }
}
