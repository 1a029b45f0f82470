//! DELETE 子句

use crate::query::ast::Expression;
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// DELETE子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteClause {
    pub expressions: Vec<Expression>,
    pub detach: bool,
}

impl DeleteClause {
    pub fn new<I, T>(expressions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        Self {
            expressions: expressions.into_iter().map(Into::into).collect(),
            detach: false,
        }
    }

    /// `DETACH DELETE`
    pub fn detach<I, T>(expressions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        Self {
            detach: true,
            ..Self::new(expressions)
        }
    }
}

impl Clause for DeleteClause {
    fn keyword(&self) -> &'static str {
        if self.detach {
            "DETACH DELETE"
        } else {
            "DELETE"
        }
    }

    fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl Render for DeleteClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.expressions, ",");
    }
}

impl_display_via_render!(DeleteClause);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::identifier;

    #[test]
    fn test_delete_and_detach() {
        let n = identifier("n").expect("identifier");
        let r = identifier("r").expect("identifier");
        assert_eq!(DeleteClause::new([&n, &r]).to_text(), "DELETE n,r");
        assert_eq!(DeleteClause::detach([n]).to_text(), "DETACH DELETE n");
    }
}
