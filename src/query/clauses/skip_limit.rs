//! SKIP / LIMIT 子句

use crate::core::error::DslResult;
use crate::query::ast::{param, Expression};
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// SKIP 子句
#[derive(Debug, Clone, PartialEq)]
pub struct SkipClause {
    pub expression: Expression,
}

/// LIMIT 子句
#[derive(Debug, Clone, PartialEq)]
pub struct LimitClause {
    pub expression: Expression,
}

impl SkipClause {
    pub fn new(count: u32) -> Self {
        Self {
            expression: Expression::from(count),
        }
    }

    /// `SKIP $name`
    pub fn parameter(name: impl Into<String>) -> DslResult<Self> {
        Ok(Self {
            expression: param(name)?,
        })
    }
}

impl LimitClause {
    pub fn new(count: u32) -> Self {
        Self {
            expression: Expression::from(count),
        }
    }

    /// `LIMIT $name`
    pub fn parameter(name: impl Into<String>) -> DslResult<Self> {
        Ok(Self {
            expression: param(name)?,
        })
    }
}

impl Clause for SkipClause {
    fn keyword(&self) -> &'static str {
        "SKIP"
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Clause for LimitClause {
    fn keyword(&self) -> &'static str {
        "LIMIT"
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Render for SkipClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), std::slice::from_ref(&self.expression), "");
    }
}

impl Render for LimitClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), std::slice::from_ref(&self.expression), "");
    }
}

impl_display_via_render!(SkipClause, LimitClause);
