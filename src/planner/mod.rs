pub mod binding_plan;
pub use binding_plan::*;

pub mod row_descriptor;
pub use row_descriptor::*;

pub mod statement_renderer;
pub use statement_renderer::*;

pub mod compile_error;
pub use compile_error::*;

pub mod compiled_query;
pub use compiled_query::*;
