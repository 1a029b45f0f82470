//! cypherdsl - A typed builder for Cypher query text
//!
//! Callers compose expressions, patterns and clauses instead of writing query
//! strings by hand; the builder renders them into syntactically correct Cypher.
//! Nothing here executes queries or validates them against a schema.
//!
//! ```
//! use cypherdsl::prelude::*;
//!
//! let name = property("n", "name")?;
//! let query = Query::new()
//!     .matching([named_node("n")?.with_label("Person")?])
//!     .filter([name.eq("Alice")])
//!     .returns([identifier("n")?])
//!     .order_by([name.desc()]);
//!
//! assert_eq!(
//!     query.to_text(),
//!     "MATCH (n:Person) WHERE n.name = 'Alice' RETURN n ORDER BY n.name DESC"
//! );
//! # Ok::<(), cypherdsl::core::DslError>(())
//! ```

pub mod config;
pub mod core;
pub mod query;
pub mod utils;

/// Commonly used builders and traits
pub mod prelude {
    pub use crate::config::{IdentifierPolicy, QuoteStyle, RenderOptions};
    pub use crate::core::{DslError, DslResult};
    pub use crate::query::ast::{
        count, function, identifier, literal, named_node, node, param, property,
        BooleanExpression, Direction, Expression, FiniteFloat, FunctionCall, Identifier, Literal, NodePattern,
        OrderByExpression, OrderTarget, Pattern, RelationshipPattern, SortDirection,
    };
    pub use crate::query::clauses::{
        Clause, CreateClause, DeleteClause, LimitClause, MatchClause, OrderByClause, ReturnClause,
        ReturnItem, SetClause, SetItem, SkipClause, WhereClause,
    };
    pub use crate::query::render::{Render, Renderer};
    pub use crate::query::statement::{ClauseSlot, Query, QueryClause};
}
