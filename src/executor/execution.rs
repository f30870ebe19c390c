use std::fmt;

use serde_json::Value;
use tracing::trace;

use crate::{
    executor::{Connection, EngineError, PreparedStatement, Step},
    planner::{BindError, CompiledQuery, RowDescriptor},
};

/// Per-call failure: argument validation or an engine diagnostic. The
/// compiled artifacts are unaffected either way.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecuteError {
    Bind(BindError),
    Engine(EngineError),
}

impl From<BindError> for ExecuteError {
    fn from(error: BindError) -> Self {
        ExecuteError::Bind(error)
    }
}

impl From<EngineError> for ExecuteError {
    fn from(error: EngineError) -> Self {
        ExecuteError::Engine(error)
    }
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteError::Bind(error) => write!(f, "{}", error),
            ExecuteError::Engine(error) => write!(f, "{}", error),
        }
    }
}

/// Row access with a tag outside the row descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownField {
    pub tag: String,
}

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown result field '{}'", self.tag)
    }
}

impl CompiledQuery {
    /// Start one execution: validate the named arguments against the binding
    /// plan, then prepare and bind positionally.
    ///
    /// Argument validation happens first, so a `BindError` is returned
    /// before the engine is ever invoked.
    pub fn execute<'q, C: Connection>(
        &'q self,
        connection: &C,
        args: &[(&str, Value)],
    ) -> Result<Execution<'q, C::Statement>, ExecuteError> {
        let values = self.binding_plan.bind(args)?;

        let mut statement = connection.prepare(&self.statement)?;
        for (position, value) in values.iter().enumerate() {
            statement.bind(position + 1, value)?;
        }

        trace!(slots = values.len(), "execution bound");

        Ok(Execution { statement, descriptor: &self.row_descriptor })
    }
}

/// One in-flight execution owning the prepared statement. Single caller;
/// dropping it (mid-iteration included) releases the engine resources.
pub struct Execution<'q, S: PreparedStatement> {
    statement: S,
    descriptor: &'q RowDescriptor,
}

impl<'q, S: PreparedStatement> Execution<'q, S> {
    /// Lazy, single-pass sequence of result rows.
    pub fn rows(self) -> Rows<'q, S> {
        Rows { statement: self.statement, descriptor: self.descriptor, done: false }
    }

    /// Drive a statement with no result rows (an insert) to completion.
    pub fn finish(mut self) -> Result<(), EngineError> {
        loop {
            match self.statement.step()? {
                Step::Row => continue,
                Step::Done => return Ok(()),
            }
        }
    }
}

/// Iterator over engine-produced rows for one execution. Not restartable:
/// a fresh execution restarts from the beginning.
pub struct Rows<'q, S: PreparedStatement> {
    statement: S,
    descriptor: &'q RowDescriptor,
    done: bool,
}

impl<'q, S: PreparedStatement> Iterator for Rows<'q, S> {
    type Item = Result<Row<'q>, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.statement.step() {
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
            Ok(Step::Done) => {
                self.done = true;
                None
            }
            Ok(Step::Row) => {
                let mut values = Vec::with_capacity(self.descriptor.len());
                for index in 0..self.descriptor.len() {
                    match self.statement.column(index) {
                        Ok(value) => values.push(value),
                        Err(error) => {
                            self.done = true;
                            return Some(Err(error));
                        }
                    }
                }
                Some(Ok(Row { descriptor: self.descriptor, values }))
            }
        }
    }
}

/// One transient result row, readable only through the tags of its
/// descriptor.
#[derive(Debug, Clone)]
pub struct Row<'q> {
    descriptor: &'q RowDescriptor,
    values: Vec<Value>,
}

impl Row<'_> {
    /// Field value by output tag; `None` when the engine produced NULL.
    pub fn field(&self, tag: &str) -> Result<Option<&Value>, UnknownField> {
        let position = self.descriptor.position_of(tag)
            .ok_or_else(|| UnknownField { tag: tag.to_string() })?;

        match &self.values[position] {
            Value::Null => Ok(None),
            value => Ok(Some(value)),
        }
    }
}
