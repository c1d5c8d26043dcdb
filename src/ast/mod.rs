//! The query AST: scalar values, arguments, selections, and the builder.

mod argument;
mod builder;
mod query;
mod values;

pub use argument::Argument;
pub use builder::QueryBuilder;
pub use query::Query;
pub use values::Value;
