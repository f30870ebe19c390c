use std::fmt;

use crate::parser::{analyzer::ResolveError, ParseError};

/// Any compile-time rejection. Once `compile` succeeds, none of these can
/// surface again for that query.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Parse(ParseError),
    Resolve(ResolveError),
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<ResolveError> for CompileError {
    fn from(error: ResolveError) -> Self {
        CompileError::Resolve(error)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Parse(error) => write!(f, "{}", error),
            CompileError::Resolve(error) => write!(f, "{}", error),
        }
    }
}
