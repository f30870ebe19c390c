use std::fmt;

use serde_json::Value;

/// Diagnostic reported by an engine backend, propagated verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine error: {}", self.message)
    }
}

/// Outcome of advancing a statement cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Row,
    Done,
}

/// The narrow contract an engine backend exposes. The compiler never sees
/// any of this; only `execute` drives it, with already-validated input.
pub trait Connection {
    type Statement: PreparedStatement;

    fn prepare(&self, statement: &str) -> Result<Self::Statement, EngineError>;
}

/// One prepared statement holding engine cursor state. Not safe for
/// concurrent use; it belongs to exactly one execution at a time, and
/// dropping it releases the underlying cursor on every exit path.
pub trait PreparedStatement {
    /// Bind a value to a 1-based placeholder position.
    fn bind(&mut self, position: usize, value: &Value) -> Result<(), EngineError>;

    fn step(&mut self) -> Result<Step, EngineError>;

    /// Value of a 0-based result column of the current row.
    fn column(&self, index: usize) -> Result<Value, EngineError>;

    /// Rewind the cursor for a fresh pass, keeping bindings.
    fn reset(&mut self) -> Result<(), EngineError>;
}
