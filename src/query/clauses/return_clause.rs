//! RETURN 子句

use crate::core::error::DslResult;
use crate::query::ast::{Expression, Identifier};
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// RETURN 子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnClause {
    pub items: Vec<ReturnItem>,
    pub distinct: bool,
}

/// 返回项
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnItem {
    pub expression: Expression,
    pub alias: Option<Identifier>,
}

impl ReturnItem {
    pub fn new(expression: impl Into<Expression>) -> Self {
        Self {
            expression: expression.into(),
            alias: None,
        }
    }

    pub fn aliased(expression: impl Into<Expression>, alias: impl Into<String>) -> DslResult<Self> {
        Ok(Self {
            expression: expression.into(),
            alias: Some(Identifier::new(alias)?),
        })
    }
}

impl From<Expression> for ReturnItem {
    fn from(value: Expression) -> Self {
        ReturnItem::new(value)
    }
}

impl From<&Expression> for ReturnItem {
    fn from(value: &Expression) -> Self {
        ReturnItem::new(value.clone())
    }
}

impl Expression {
    /// `expr AS alias`
    pub fn aliased(&self, alias: impl Into<String>) -> DslResult<ReturnItem> {
        ReturnItem::aliased(self.clone(), alias)
    }
}

impl Render for ReturnItem {
    fn render(&self, out: &mut Renderer) {
        self.expression.render(out);
        if let Some(alias) = &self.alias {
            out.push_str(" AS ");
            alias.render(out);
        }
    }
}

impl ReturnClause {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReturnItem>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            distinct: false,
        }
    }

    /// `RETURN DISTINCT`
    pub fn distinct<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReturnItem>,
    {
        Self {
            distinct: true,
            ..Self::new(items)
        }
    }
}

impl Clause for ReturnClause {
    fn keyword(&self) -> &'static str {
        if self.distinct {
            "RETURN DISTINCT"
        } else {
            "RETURN"
        }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Render for ReturnClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.items, ",");
    }
}

impl_display_via_render!(ReturnClause, ReturnItem);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::{count, identifier, property};

    #[test]
    fn test_return_items() {
        let n = identifier("n").expect("identifier");
        let name = property("n", "name").expect("property");
        let clause = ReturnClause::new([n, name]);
        assert_eq!(clause.to_text(), "RETURN n,n.name");
    }

    #[test]
    fn test_return_alias_and_distinct() {
        let n = identifier("n").expect("identifier");
        let total = count(n.clone()).aliased("total").expect("alias");
        let clause = ReturnClause::distinct(vec![ReturnItem::new(n), total]);
        assert_eq!(clause.to_text(), "RETURN DISTINCT n,count(n) AS total");
    }

    #[test]
    fn test_invalid_alias() {
        let n = identifier("n").expect("identifier");
        assert!(n.aliased("").is_err());
    }
}
