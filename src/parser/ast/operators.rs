use std::fmt;

use crate::{parser::QueryParser, schema::ScalarType};

/// Binary operator vocabulary. Every operator requires identically-typed
/// operands; the result type comes from the promotion table in
/// `result_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCategory {
    Equality,
    Ordering,
    Boolean,
    Arithmetic,
}

impl BinaryOp {
    pub fn category(self) -> OpCategory {
        match self {
            BinaryOp::Eq | BinaryOp::NotEq => OpCategory::Equality,
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => OpCategory::Ordering,
            BinaryOp::And | BinaryOp::Or => OpCategory::Boolean,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
                OpCategory::Arithmetic
            }
        }
    }

    /// Binding strength for precedence climbing; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq | BinaryOp::NotEq | BinaryOp::Lt | BinaryOp::LtEq |
            BinaryOp::Gt | BinaryOp::GtEq => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 5,
        }
    }

    /// Operator token at the cursor, without consuming it. Two-character
    /// tokens are checked before their one-character prefixes.
    pub fn check(parser: &QueryParser) -> Option<BinaryOp> {
        let comparers = &parser.comparers;

        if comparers.less_than_or_equal.compare(parser) {
            return Some(BinaryOp::LtEq);
        }
        if comparers.greater_than_or_equal.compare(parser) {
            return Some(BinaryOp::GtEq);
        }
        if comparers.not_equal_b.compare(parser) || comparers.not_equal_c.compare(parser) {
            return Some(BinaryOp::NotEq);
        }
        if comparers.equal.compare(parser) {
            return Some(BinaryOp::Eq);
        }
        if comparers.less_than.compare(parser) {
            return Some(BinaryOp::Lt);
        }
        if comparers.greater_than.compare(parser) {
            return Some(BinaryOp::Gt);
        }
        if comparers.and.compare(parser) {
            return Some(BinaryOp::And);
        }
        if comparers.or.compare(parser) {
            return Some(BinaryOp::Or);
        }
        if comparers.plus.compare(parser) {
            return Some(BinaryOp::Add);
        }
        if comparers.minus.compare(parser) {
            return Some(BinaryOp::Sub);
        }
        if comparers.star.compare(parser) {
            return Some(BinaryOp::Mul);
        }
        if comparers.slash.compare(parser) {
            return Some(BinaryOp::Div);
        }
        if comparers.percent.compare(parser) {
            return Some(BinaryOp::Mod);
        }

        None
    }

    pub fn consume(self, parser: &mut QueryParser) {
        let length = match self {
            BinaryOp::And => 3,
            BinaryOp::NotEq | BinaryOp::LtEq | BinaryOp::GtEq | BinaryOp::Or => 2,
            _ => 1,
        };
        parser.jump(length);
    }

    /// Promotion table keyed by (operator category, operand type). There is
    /// no entry for mixed operand types: both sides must already have the
    /// same scalar type.
    pub fn result_type(self, operands: ScalarType) -> Option<ScalarType> {
        match (self.category(), operands) {
            (OpCategory::Equality, _) => Some(ScalarType::Bool),
            (OpCategory::Ordering, ScalarType::Int | ScalarType::Float | ScalarType::Text) => {
                Some(ScalarType::Bool)
            }
            (OpCategory::Boolean, ScalarType::Bool) => Some(ScalarType::Bool),
            (OpCategory::Arithmetic, ScalarType::Int) => Some(ScalarType::Int),
            (OpCategory::Arithmetic, ScalarType::Float) if self != BinaryOp::Mod => {
                Some(ScalarType::Float)
            }
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Eq => write!(f, "="),
            BinaryOp::NotEq => write!(f, "!="),
            BinaryOp::Lt => write!(f, "<"),
            BinaryOp::LtEq => write!(f, "<="),
            BinaryOp::Gt => write!(f, ">"),
            BinaryOp::GtEq => write!(f, ">="),
            BinaryOp::And => write!(f, "AND"),
            BinaryOp::Or => write!(f, "OR"),
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
            BinaryOp::Mod => write!(f, "%"),
        }
    }
}
