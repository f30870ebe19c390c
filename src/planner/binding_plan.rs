use std::fmt;

use serde_json::Value;

use crate::{
    parser::analyzer::{AnalyzedStatement, ParamSlot, ParamSource},
    schema::ScalarType,
};

/// Call-time argument failure. The compiled artifacts are untouched by a
/// failed bind and the call is safe to retry with corrected arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    UnknownArgument(String),
    MissingArgument(String),
    DuplicateArgument(String),
    TypeMismatch { name: String, expected: ScalarType, got: Option<ScalarType> },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::UnknownArgument(name) => {
                write!(f, "argument '{}' does not match any parameter", name)
            }
            BindError::MissingArgument(name) => {
                write!(f, "missing argument for parameter '{}'", name)
            }
            BindError::DuplicateArgument(name) => {
                write!(f, "argument '{}' supplied more than once", name)
            }
            BindError::TypeMismatch { name, expected, got } => match got {
                Some(got) => write!(
                    f,
                    "argument '{}' has type {} but the parameter declares {}",
                    name, got, expected
                ),
                None => write!(
                    f,
                    "argument '{}' has no scalar type but the parameter declares {}",
                    name, expected
                ),
            },
        }
    }
}

/// Ordered, positionally-indexed parameter descriptor; slot order is the
/// order of first textual occurrence in the statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindingPlan {
    pub slots: Vec<ParamSlot>,
}

impl BindingPlan {
    /// Pure projection of the analyzed parameter list; validation already
    /// happened during resolution.
    pub fn from_analysis(analyzed: &AnalyzedStatement) -> Self {
        BindingPlan { slots: analyzed.parameters.clone() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Caller-visible slots; literal slots are bound automatically and never
    /// appear here.
    pub fn named_slots(&self) -> impl Iterator<Item = (&str, ScalarType)> {
        self.slots.iter().filter_map(|slot| slot.name().map(|name| (name, slot.ty)))
    }

    /// Validate the named arguments and produce the positional value vector,
    /// literals included. An argument name feeds every slot carrying that
    /// name; supplying an unrecognized or duplicate name, omitting a slot's
    /// name, or supplying a wrongly-typed value fails without touching any
    /// engine.
    pub fn bind(&self, args: &[(&str, Value)]) -> Result<Vec<Value>, BindError> {
        for (index, (name, _)) in args.iter().enumerate() {
            if args[..index].iter().any(|(other, _)| other == name) {
                return Err(BindError::DuplicateArgument(name.to_string()));
            }
        }

        for (name, _) in args {
            if !self.slots.iter().any(|slot| slot.name() == Some(*name)) {
                return Err(BindError::UnknownArgument(name.to_string()));
            }
        }

        let mut values = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            match &slot.source {
                ParamSource::Literal(literal) => values.push(literal.to_value()),
                ParamSource::Named(slot_name) => {
                    let Some((_, value)) = args.iter().find(|(name, _)| *name == slot_name.as_str()) else {
                        return Err(BindError::MissingArgument(slot_name.clone()));
                    };
                    match ScalarType::of_value(value) {
                        Some(ty) if ty == slot.ty => values.push(value.clone()),
                        got => {
                            return Err(BindError::TypeMismatch {
                                name: slot_name.clone(),
                                expected: slot.ty,
                                got,
                            });
                        }
                    }
                }
            }
        }

        Ok(values)
    }
}
