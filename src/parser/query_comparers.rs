use crate::parser::WordComparer;

/// The fixed keyword and operator vocabulary of the annotated statement
/// grammar.
#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub join: WordComparer,
    pub inner_join: WordComparer,
    pub left_join: WordComparer,
    pub right_join: WordComparer,
    pub full_join: WordComparer,
    pub on: WordComparer,
    pub r#where: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub alias: WordComparer,
    pub insert_into: WordComparer,
    pub values: WordComparer,
    pub b_true: WordComparer,
    pub b_false: WordComparer,
    pub equal: WordComparer,
    pub not_equal_b: WordComparer, // basic
    pub not_equal_c: WordComparer, // c
    pub greater_than: WordComparer,
    pub greater_than_or_equal: WordComparer,
    pub less_than: WordComparer,
    pub less_than_or_equal: WordComparer,
    pub plus: WordComparer,
    pub minus: WordComparer,
    pub star: WordComparer,
    pub slash: WordComparer,
    pub percent: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            from: WordComparer::new("FROM").with_whitespace_postfix(),
            join: WordComparer::new("JOIN").with_whitespace_postfix(),
            inner_join: WordComparer::new("INNER JOIN").with_whitespace_postfix(),
            left_join: WordComparer::new("LEFT JOIN").with_whitespace_postfix(),
            right_join: WordComparer::new("RIGHT JOIN").with_whitespace_postfix(),
            full_join: WordComparer::new("FULL JOIN").with_whitespace_postfix(),
            on: WordComparer::new("ON").with_whitespace_postfix().with_optional_postfix('('),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix().with_optional_postfix('('),
            and: WordComparer::new("AND").with_whitespace_postfix().with_optional_postfix('('),
            or: WordComparer::new("OR").with_whitespace_postfix().with_optional_postfix('('),
            alias: WordComparer::new("AS").with_whitespace_postfix(),
            insert_into: WordComparer::new("INSERT INTO").with_whitespace_postfix(),
            values: WordComparer::new("VALUES").with_whitespace_postfix().with_optional_postfix('('),
            b_true: WordComparer::new("TRUE").with_any_delimiter_postfix().with_eof(),
            b_false: WordComparer::new("FALSE").with_any_delimiter_postfix().with_eof(),
            equal: WordComparer::new("="),
            not_equal_b: WordComparer::new("<>"),
            not_equal_c: WordComparer::new("!="),
            greater_than: WordComparer::new(">"),
            greater_than_or_equal: WordComparer::new(">="),
            less_than: WordComparer::new("<"),
            less_than_or_equal: WordComparer::new("<="),
            plus: WordComparer::new("+"),
            minus: WordComparer::new("-"),
            star: WordComparer::new("*"),
            slash: WordComparer::new("/"),
            percent: WordComparer::new("%"),
        }
    }
}
