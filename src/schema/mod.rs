pub mod scalar_type;
pub use scalar_type::*;

pub mod table;
pub use table::*;

pub mod schema;
pub use schema::*;
