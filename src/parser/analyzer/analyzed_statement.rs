use indexmap::IndexSet;

use crate::{parser::ast::Literal, schema::ScalarType};

/// Where a binding slot's value comes from at execution time: a caller
/// argument looked up by name, or a literal stored at compile time and bound
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSource {
    Named(String),
    Literal(Literal),
}

/// One ordinal binding slot. Repeated parameter names are not merged: each
/// textual occurrence reserves its own slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSlot {
    pub source: ParamSource,
    pub ty: ScalarType,
}

impl ParamSlot {
    pub fn named(name: impl Into<String>, ty: ScalarType) -> Self {
        Self { source: ParamSource::Named(name.into()), ty }
    }

    pub fn literal(literal: Literal) -> Self {
        let ty = literal.scalar_type();
        Self { source: ParamSource::Literal(literal), ty }
    }

    /// The argument name feeding this slot, `None` for literal slots.
    pub fn name(&self) -> Option<&str> {
        match &self.source {
            ParamSource::Named(name) => Some(name),
            ParamSource::Literal(_) => None,
        }
    }
}

/// One resolved select-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColumn {
    pub tag: String,
    pub table: String,
    pub column: String,
    pub ty: ScalarType,
}

/// Everything the resolver accumulates while walking a statement: referenced
/// tables, selected columns in select-list order, declared aliases, and
/// binding slots in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyzedStatement {
    pub referenced_tables: IndexSet<String>,
    pub selected: Vec<SelectedColumn>,
    pub aliases: IndexSet<String>,
    pub parameters: Vec<ParamSlot>,
}
