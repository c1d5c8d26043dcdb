//! Serialization of validated query trees into wire-format text.
//!
//! The output is brace-only nesting: one field or sub-query block per line,
//! no indentation at any depth. Multiple top-level selections render as
//! comma-separated sibling blocks inside one outer brace pair.

use crate::ast::{Argument, Query, Value};
use std::fmt::{Result, Write};

#[cfg(test)]
mod tests;

/// Render an AST node to GraphQL wire text.
pub trait ToGraphQL {
    fn to_graphql(&self) -> String;
}

impl ToGraphQL for Value {
    fn to_graphql(&self) -> String {
        self.to_string()
    }
}

impl ToGraphQL for Argument {
    fn to_graphql(&self) -> String {
        self.to_string()
    }
}

impl ToGraphQL for Query {
    /// A single selection block, without the document's outer braces.
    fn to_graphql(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_query(f, self)
    }
}

/// Document serializer. Expects input that already passed validation;
/// malformed trees fed directly render as-is.
pub struct Formatter {
    buffer: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Serialize the top-level selections into one document:
    /// `{\n` + blocks joined by `,\n` + `\n}`.
    pub fn format(mut self, queries: &[Query]) -> std::result::Result<String, std::fmt::Error> {
        writeln!(self.buffer, "{{")?;
        for (i, query) in queries.iter().enumerate() {
            if i > 0 {
                writeln!(self.buffer, ",")?;
            }
            write_query(&mut self.buffer, query)?;
        }
        write!(self.buffer, "\n}}")?;
        Ok(self.buffer)
    }
}

/// One selection block: collection name, optional `(k: v, ...)` argument
/// list, then the brace-delimited body. Fields come first, each sub-query's
/// full block after them, all in insertion order.
fn write_query<W: Write>(out: &mut W, query: &Query) -> Result {
    write!(out, "{}", query.collection)?;
    if !query.arguments.is_empty() {
        write!(out, "(")?;
        for (i, arg) in query.arguments.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", arg)?;
        }
        write!(out, ")")?;
    }
    writeln!(out, " {{")?;
    for field in &query.fields {
        writeln!(out, "{}", field)?;
    }
    for child in &query.sub_queries {
        write_query(out, child)?;
        writeln!(out)?;
    }
    write!(out, "}}")?;
    Ok(())
}
