use crate::parser::QueryParser;

/// Case-insensitive keyword matcher over the cursor, with configurable
/// lookahead requirements on the character that follows the word.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    full_block_delimiter_postfix: bool,
    eof: bool,
    optional_postfix: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        Self {
            length: word.len(),
            word: word.to_uppercase().chars().collect(),
            whitespace_postfix: false,
            full_block_delimiter_postfix: false,
            eof: false,
            optional_postfix: vec![],
        }
    }

    pub fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_ascii_whitespace()
    }

    pub fn is_any_delimiter(ch: char) -> bool {
        matches!(ch, ',' | '(' | ')' | '.' | ';') || Self::is_block_delimiter(ch)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase() {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
            return self.eof;
        }

        if !self.full_block_delimiter_postfix && !self.whitespace_postfix &&
            self.optional_postfix.is_empty() {
            return true;
        }

        let next = parser.text_v[parser.position + position];

        if self.full_block_delimiter_postfix && Self::is_any_delimiter(next) {
            return true;
        }

        if self.whitespace_postfix && Self::is_block_delimiter(next) {
            return true;
        }

        for value in self.optional_postfix.iter() {
            if *value == next {
                return true;
            }
        }

        false
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
    pub fn with_any_delimiter_postfix(mut self) -> Self { self.full_block_delimiter_postfix = true; self }
    pub fn with_optional_postfix(mut self, value: char) -> Self { self.optional_postfix.push(value); self }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QueryParser, WordComparer};

    #[test]
    pub fn test_compare_case_insensitive() {
        let parser = QueryParser::new("select x");
        let comparer = WordComparer::new("SELECT").with_whitespace_postfix();

        assert!(comparer.compare(&parser));
    }

    #[test]
    pub fn test_compare_requires_postfix() {
        let parser = QueryParser::new("selector");
        let comparer = WordComparer::new("SELECT").with_whitespace_postfix();

        assert!(!comparer.compare(&parser));
    }

    #[test]
    pub fn test_compare_at_eof() {
        let parser = QueryParser::new("true");

        let without_eof = WordComparer::new("TRUE").with_whitespace_postfix();
        assert!(!without_eof.compare(&parser));

        let with_eof = WordComparer::new("TRUE").with_whitespace_postfix().with_eof();
        assert!(with_eof.compare(&parser));
    }

    #[test]
    pub fn test_compare_optional_postfix() {
        let parser = QueryParser::new("AND(a = b)");
        let comparer = WordComparer::new("AND").with_whitespace_postfix().with_optional_postfix('(');

        assert!(comparer.compare(&parser));
    }

    #[test]
    pub fn test_symbol_without_postfix_matches_anywhere() {
        let parser = QueryParser::new(">=1400");
        let comparer = WordComparer::new(">=");

        assert!(comparer.compare(&parser));
    }

    #[test]
    pub fn test_any_delimiter_postfix() {
        let parser = QueryParser::new("true)");
        let comparer = WordComparer::new("TRUE").with_any_delimiter_postfix();

        assert!(comparer.compare(&parser));
    }
}
