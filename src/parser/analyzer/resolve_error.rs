use std::fmt;

use crate::{parser::ast::BinaryOp, schema::ScalarType};

/// Compile-time rejection produced by the resolver and type checker. None of
/// these can surface once a query has compiled.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    UnknownTable(String),
    UnknownColumn { name: String, candidates: Vec<String> },
    AmbiguousColumn { name: String, matches: Vec<(String, String)> }, // (table, column)
    DuplicateAlias(String),
    ColumnAlreadySelected { table: String, name: String },
    AnnotationTypeMismatch { name: String, declared: ScalarType, actual: ScalarType },
    OperandTypeMismatch { op: BinaryOp, left: ScalarType, right: ScalarType },
    UnsupportedOperand { op: BinaryOp, operands: ScalarType },
    ValueCountMismatch { expected: usize, got: usize },
    ValueTypeMismatch { column: String, expected: ScalarType, got: ScalarType },
    ColumnInValues(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownTable(name) => write!(f, "unknown table '{}'", name),
            ResolveError::UnknownColumn { name, candidates } => {
                write!(f, "unknown column '{}'", name)?;
                if !candidates.is_empty() {
                    write!(f, " (known columns: {})", candidates.join(", "))?;
                }
                Ok(())
            }
            ResolveError::AmbiguousColumn { name, matches } => {
                let tables: Vec<&str> = matches.iter().map(|(t, _)| t.as_str()).collect();
                write!(
                    f,
                    "ambiguous column '{}' requires a table qualifier (declared in: {})",
                    name,
                    tables.join(", ")
                )
            }
            ResolveError::DuplicateAlias(alias) => write!(f, "alias '{}' already defined", alias),
            ResolveError::ColumnAlreadySelected { table, name } => {
                write!(f, "column '{}.{}' already selected", table, name)
            }
            ResolveError::AnnotationTypeMismatch { name, declared, actual } => write!(
                f,
                "result column '{}' declared as {} but the schema declares {}",
                name, declared, actual
            ),
            ResolveError::OperandTypeMismatch { op, left, right } => write!(
                f,
                "operand type mismatch for '{}': {} vs {}",
                op, left, right
            ),
            ResolveError::UnsupportedOperand { op, operands } => {
                write!(f, "operator '{}' is not defined for {} operands", op, operands)
            }
            ResolveError::ValueCountMismatch { expected, got } => write!(
                f,
                "insert value count mismatch: {} columns but {} values",
                expected, got
            ),
            ResolveError::ValueTypeMismatch { column, expected, got } => write!(
                f,
                "insert value for '{}' has type {} but the column declares {}",
                column, got, expected
            ),
            ResolveError::ColumnInValues(name) => {
                write!(f, "column reference '{}' is not valid in an insert value list", name)
            }
        }
    }
}
