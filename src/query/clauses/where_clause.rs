//! WHERE 子句

use crate::core::types::operators::{LogicalOperator, Operator};
use crate::query::ast::BooleanExpression;
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// WHERE 子句，多个条件以 AND 连接
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhereClause {
    pub conditions: Vec<BooleanExpression>,
}

impl WhereClause {
    pub fn new<I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = BooleanExpression>,
    {
        Self {
            conditions: conditions.into_iter().collect(),
        }
    }
}

/// 作为 AND 操作数渲染的条件，OR / XOR 加括号
struct Conjunct<'a>(&'a BooleanExpression);

impl Render for Conjunct<'_> {
    fn render(&self, out: &mut Renderer) {
        self.0.render_child(out, LogicalOperator::And.precedence() + 1);
    }
}

impl Clause for WhereClause {
    fn keyword(&self) -> &'static str {
        "WHERE"
    }

    fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Render for WhereClause {
    fn render(&self, out: &mut Renderer) {
        // 单个条件不需要括号
        if let [single] = self.conditions.as_slice() {
            render_list(out, self.keyword(), std::slice::from_ref(single), "");
            return;
        }
        let conjuncts: Vec<Conjunct<'_>> = self.conditions.iter().map(Conjunct).collect();
        render_list(out, self.keyword(), &conjuncts, " AND ");
    }
}

impl_display_via_render!(WhereClause);
