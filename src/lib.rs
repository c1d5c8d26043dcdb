//! AST-native GraphQL query builder.
//!
//! Build queries as typed selection trees, not strings. No templating, no
//! string concatenation at call sites.
//!
//! ```
//! use grail_core::prelude::*;
//!
//! let query = QueryBuilder::new()
//!     .from_collection("users")
//!     .with_fields(["id", "name"])
//!     .and_then(|b| b.with_arguments([Argument::new("limit", 10)]))
//!     .and_then(|b| b.build())
//!     .unwrap();
//!
//! assert_eq!(query, "{\nusers(limit: 10) {\nid\nname\n}\n}");
//! ```

pub mod ast;
pub mod error;
pub mod fmt;

pub use ast::QueryBuilder;
pub use error::QueryError;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::fmt::ToGraphQL;
}
