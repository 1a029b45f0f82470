//! ORDER BY 子句

use crate::query::ast::{OrderByExpression, OrderTarget};
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// ORDER BY 子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderByClause {
    pub expressions: Vec<OrderByExpression>,
}

impl OrderByClause {
    /// 裸表达式包装为未指定方向的排序项，已有方向的保持不变
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OrderTarget>,
    {
        Self {
            expressions: items
                .into_iter()
                .map(|item| item.into().into_order_by())
                .collect(),
        }
    }
}

impl Clause for OrderByClause {
    fn keyword(&self) -> &'static str {
        "ORDER BY"
    }

    fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

impl Render for OrderByClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.expressions, ",");
    }
}

impl_display_via_render!(OrderByClause);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::{identifier, Expression, OrderByExpression, SortDirection};

    fn ident(name: &str) -> Expression {
        identifier(name).expect("valid identifier")
    }

    #[test]
    fn test_bare_expression() {
        let clause = OrderByClause::new([ident("name")]);
        assert_eq!(clause.to_text(), "ORDER BY name");
    }

    #[test]
    fn test_explicit_direction() {
        let clause = OrderByClause::new([OrderByExpression::new(
            ident("name"),
            SortDirection::Descending,
        )]);
        assert_eq!(clause.to_text(), "ORDER BY name DESC");
    }

    #[test]
    fn test_multiple_expressions() {
        let clause = OrderByClause::new([ident("name"), ident("age")]);
        assert_eq!(clause.to_text(), "ORDER BY name,age");
    }

    #[test]
    fn test_mixed_targets_keep_order() {
        let clause = OrderByClause::new(vec![
            OrderTarget::from(ident("age").desc()),
            OrderTarget::from(ident("name")),
            OrderTarget::from(ident("age").asc()),
        ]);
        assert_eq!(clause.to_text(), "ORDER BY age DESC,name,age ASC");
        assert_eq!(clause.expressions[1].direction, SortDirection::Unspecified);
    }

    #[test]
    fn test_empty_clause() {
        let clause = OrderByClause::new(Vec::<Expression>::new());
        assert!(clause.is_empty());
        assert_eq!(clause.to_text(), "");
    }
}
