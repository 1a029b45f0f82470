//! CREATE 子句

use crate::query::ast::Pattern;
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// CREATE 子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateClause {
    pub patterns: Vec<Pattern>,
}

impl CreateClause {
    pub fn new<I, T>(patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

impl Clause for CreateClause {
    fn keyword(&self) -> &'static str {
        "CREATE"
    }

    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Render for CreateClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.patterns, ",");
    }
}

impl_display_via_render!(CreateClause);
