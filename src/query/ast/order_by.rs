//! ORDER BY 项

use crate::query::ast::expressions::Expression;
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    Unspecified,
}

impl SortDirection {
    pub fn token(&self) -> Option<&'static str> {
        match self {
            SortDirection::Ascending => Some("ASC"),
            SortDirection::Descending => Some("DESC"),
            SortDirection::Unspecified => None,
        }
    }
}

/// 带排序方向的表达式
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpression {
    pub expression: Expression,
    pub direction: SortDirection,
}

impl OrderByExpression {
    pub fn new(expression: impl Into<Expression>, direction: SortDirection) -> Self {
        Self {
            expression: expression.into(),
            direction,
        }
    }
}

impl Render for OrderByExpression {
    fn render(&self, out: &mut Renderer) {
        self.expression.render(out);
        if let Some(token) = self.direction.token() {
            out.push(' ');
            out.push_str(token);
        }
    }
}

impl_display_via_render!(OrderByExpression);

/// ORDER BY 子句的输入项
///
/// 裸表达式在子句构造时统一包装为 `Unspecified` 方向
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTarget {
    Wrapped(OrderByExpression),
    Bare(Expression),
}

impl OrderTarget {
    pub fn into_order_by(self) -> OrderByExpression {
        match self {
            OrderTarget::Wrapped(wrapped) => wrapped,
            OrderTarget::Bare(expression) => {
                OrderByExpression::new(expression, SortDirection::Unspecified)
            }
        }
    }
}

impl From<OrderByExpression> for OrderTarget {
    fn from(value: OrderByExpression) -> Self {
        OrderTarget::Wrapped(value)
    }
}

impl From<Expression> for OrderTarget {
    fn from(value: Expression) -> Self {
        OrderTarget::Bare(value)
    }
}

impl From<&Expression> for OrderTarget {
    fn from(value: &Expression) -> Self {
        OrderTarget::Bare(value.clone())
    }
}

impl Expression {
    /// 升序排序项
    pub fn asc(&self) -> OrderByExpression {
        OrderByExpression::new(self.clone(), SortDirection::Ascending)
    }

    /// 降序排序项
    pub fn desc(&self) -> OrderByExpression {
        OrderByExpression::new(self.clone(), SortDirection::Descending)
    }
}
