use crate::ast::{Argument, QueryBuilder};
use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// One collection selection: a named collection, the fields selected on it,
/// the arguments applied to it, and any nested selections.
///
/// Fields, arguments, and sub-queries are append-only. Insertion order is
/// preserved and semantically significant: it determines output order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub collection: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub sub_queries: Vec<Query>,
}

impl Query {
    /// Start a selection on the given collection. The name is taken as
    /// given; an empty name is not rejected here (permissive pass-through).
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }

    /// Append field names. Duplicates are kept verbatim.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fields
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Append a single field name.
    pub fn field(self, name: impl AsRef<str>) -> Self {
        self.fields([name])
    }

    /// Append arguments.
    pub fn arguments<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = Argument>,
    {
        self.arguments.extend(args);
        self
    }

    /// Append a single argument.
    pub fn argument(self, arg: Argument) -> Self {
        self.arguments([arg])
    }

    /// Append nested selections. Each child is owned by value: its rendered
    /// block appears one level deeper, after this selection's own fields.
    pub fn sub_queries<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Query>,
    {
        self.sub_queries.extend(children);
        self
    }

    /// Append a single nested selection.
    pub fn sub_query(self, child: Query) -> Self {
        self.sub_queries([child])
    }

    /// Absorb a builder's accumulated top-level selections as children of
    /// this one. The builder is consumed, so mutating it afterwards cannot
    /// reach the captured copies.
    pub fn sub_builder(self, builder: QueryBuilder) -> Self {
        self.sub_queries(builder.into_queries())
    }

    /// Check that this selection selects something: at least one field or
    /// one sub-query. Shallow on purpose: descendants are not visited, so a
    /// nested empty selection passes here and renders as an empty block.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.fields.is_empty() && self.sub_queries.is_empty() {
            return Err(QueryError::MissingFields(self.collection.clone()));
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(collection: &str) -> Self {
        Query::new(collection)
    }
}

impl From<String> for Query {
    fn from(collection: String) -> Self {
        Query::new(collection)
    }
}
