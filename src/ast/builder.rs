use crate::ast::{Argument, Query};
use crate::error::QueryError;
use crate::fmt::Formatter;
use serde::{Deserialize, Serialize};

/// Fluent builder for a query document.
///
/// A document holds one or more top-level selections in insertion order.
/// `from_collection` appends a new top-level entry; the incremental
/// `with_*` methods always target the FIRST entry. That asymmetry is part
/// of the contract: the incremental path exists for single-collection
/// ergonomics, and callers composing several independent top-level
/// collections pass fully composed [`Query`] values to `from_collection`
/// instead.
///
/// ```
/// use grail_core::prelude::*;
///
/// let doc = QueryBuilder::new()
///     .from_collection(Query::new("posts").fields(["title"]))
///     .from_collection(Query::new("tags").fields(["name"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(doc, "{\nposts {\ntitle\n},\ntags {\nname\n}\n}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryBuilder {
    queries: Vec<Query>,
}

impl QueryBuilder {
    /// Create an empty builder. Building it as-is fails with
    /// [`QueryError::MissingCollection`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new top-level selection. Accepts a bare collection name or
    /// a composed [`Query`] carrying fields, arguments, and sub-queries.
    pub fn from_collection(mut self, query: impl Into<Query>) -> Self {
        self.queries.push(query.into());
        self
    }

    /// Append field names to the FIRST top-level selection.
    pub fn with_fields<I, S>(mut self, names: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let first = self.first_mut()?;
        first
            .fields
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        Ok(self)
    }

    /// Append arguments to the FIRST top-level selection.
    pub fn with_arguments<I>(mut self, args: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = Argument>,
    {
        let first = self.first_mut()?;
        first.arguments.extend(args);
        Ok(self)
    }

    /// Absorb another builder's accumulated selections as sub-queries of
    /// the FIRST top-level selection. The sub-builder is consumed at this
    /// call; mutating a clone of it afterwards cannot reach the parent.
    pub fn with_sub_query(mut self, builder: QueryBuilder) -> Result<Self, QueryError> {
        let first = self.first_mut()?;
        first.sub_queries.extend(builder.queries);
        Ok(self)
    }

    /// The accumulated top-level selections, in insertion order.
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Consume the builder, yielding its top-level selections. This is the
    /// absorption seam used when a builder contributes sub-queries.
    pub fn into_queries(self) -> Vec<Query> {
        self.queries
    }

    /// Validate every top-level selection, then serialize the document.
    ///
    /// Validation scans entries in insertion order and stops at the first
    /// violation. It is shallow: each entry checks its own fields and
    /// sub-queries emptiness, never its descendants'. Does not consume the
    /// builder; repeated calls yield identical output.
    pub fn build(&self) -> Result<String, QueryError> {
        if self.queries.is_empty() {
            return Err(QueryError::MissingCollection);
        }
        for query in &self.queries {
            query.validate()?;
        }
        Formatter::new()
            .format(&self.queries)
            .map_err(|e| QueryError::invalid_state(e.to_string()))
    }

    fn first_mut(&mut self) -> Result<&mut Query, QueryError> {
        self.queries.first_mut().ok_or(QueryError::MissingCollection)
    }
}
