pub mod statement;
pub use statement::*;

pub mod select_query;
pub use select_query::*;

pub mod insert_query;
pub use insert_query::*;

pub mod result_column;
pub use result_column::*;

pub mod column_ref;
pub use column_ref::*;

pub mod placeholder;
pub use placeholder::*;

pub mod literal;
pub use literal::*;

pub mod scalar_expr;
pub use scalar_expr::*;

pub mod operators;
pub use operators::*;

pub mod join;
pub use join::*;

pub mod type_keyword;
pub use type_keyword::*;
