pub mod parser;

pub mod schema;
pub use schema::{ScalarType, Schema, SchemaError, Table};

pub mod planner;
pub use planner::{BindError, BindingPlan, CompileError, CompiledQuery, RowDescriptor, compile};

pub mod executor;
pub use executor::{
    Connection, EngineError, ExecuteError, Execution, MemoryEngine, PreparedStatement, Row, Rows,
    Step,
};
