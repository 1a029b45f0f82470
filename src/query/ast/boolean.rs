//! 布尔表达式
//!
//! 比较、空值判断以及 AND / OR / XOR / NOT 组合

use crate::core::error::DslResult;
use crate::core::types::operators::{ComparisonOperator, LogicalOperator, Operator, NOT_PRECEDENCE};
use crate::query::ast::expressions::{Expression, Literal};
use crate::query::render::{impl_display_via_render, Render, Renderer};
use serde_json::Value;

/// 布尔表达式
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanExpression {
    Comparison {
        left: Box<Expression>,
        operator: ComparisonOperator,
        right: Box<Expression>,
    },
    NullCheck {
        operand: Box<Expression>,
        negated: bool,
    },
    Logical {
        left: Box<BooleanExpression>,
        operator: LogicalOperator,
        right: Box<BooleanExpression>,
    },
    Not(Box<BooleanExpression>),
}

impl BooleanExpression {
    pub fn and(&self, other: impl Into<BooleanExpression>) -> BooleanExpression {
        self.combine(LogicalOperator::And, other.into())
    }

    pub fn or(&self, other: impl Into<BooleanExpression>) -> BooleanExpression {
        self.combine(LogicalOperator::Or, other.into())
    }

    pub fn xor(&self, other: impl Into<BooleanExpression>) -> BooleanExpression {
        self.combine(LogicalOperator::Xor, other.into())
    }

    pub fn not(&self) -> BooleanExpression {
        BooleanExpression::Not(Box::new(self.clone()))
    }

    fn combine(&self, operator: LogicalOperator, right: BooleanExpression) -> BooleanExpression {
        BooleanExpression::Logical {
            left: Box::new(self.clone()),
            operator,
            right: Box::new(right),
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BooleanExpression::Comparison { operator, .. } => operator.precedence(),
            BooleanExpression::NullCheck { .. } => ComparisonOperator::Equal.precedence(),
            BooleanExpression::Logical { operator, .. } => operator.precedence(),
            BooleanExpression::Not(_) => NOT_PRECEDENCE,
        }
    }

    pub(crate) fn render_child(&self, out: &mut Renderer, min_precedence: u8) {
        if self.precedence() < min_precedence {
            out.push('(');
            self.render(out);
            out.push(')');
        } else {
            self.render(out);
        }
    }
}

impl Render for BooleanExpression {
    fn render(&self, out: &mut Renderer) {
        match self {
            BooleanExpression::Comparison {
                left,
                operator,
                right,
            } => {
                // 比较不可结合，同级操作数也加括号
                let min = operator.precedence() + 1;
                left.render_operand(out, min);
                out.push(' ');
                out.push_str(operator.name());
                out.push(' ');
                right.render_operand(out, min);
            }
            BooleanExpression::NullCheck { operand, negated } => {
                operand.render_operand(out, ComparisonOperator::Equal.precedence() + 1);
                out.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            BooleanExpression::Logical {
                left,
                operator,
                right,
            } => {
                left.render_child(out, operator.precedence());
                out.push(' ');
                out.push_str(operator.name());
                out.push(' ');
                // 右侧同级也加括号，保持构造时的结合方式
                right.render_child(out, operator.precedence() + 1);
            }
            BooleanExpression::Not(inner) => {
                out.push_str("NOT ");
                inner.render_child(out, NOT_PRECEDENCE);
            }
        }
    }
}

impl_display_via_render!(BooleanExpression);

impl From<BooleanExpression> for Expression {
    fn from(value: BooleanExpression) -> Self {
        Expression::Boolean(value)
    }
}

impl Expression {
    fn compare(&self, operator: ComparisonOperator, right: Expression) -> BooleanExpression {
        BooleanExpression::Comparison {
            left: Box::new(self.clone()),
            operator,
            right: Box::new(right),
        }
    }

    /// `self = value`
    pub fn eq(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::Equal, value.into())
    }

    /// `self <> value`
    pub fn ne(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::NotEqual, value.into())
    }

    pub fn lt(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::LessThan, value.into())
    }

    pub fn lte(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::LessThanOrEqual, value.into())
    }

    pub fn gt(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::GreaterThan, value.into())
    }

    pub fn gte(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::GreaterThanOrEqual, value.into())
    }

    pub fn starts_with(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::StartsWith, value.into())
    }

    pub fn ends_with(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::EndsWith, value.into())
    }

    pub fn contains(&self, value: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::Contains, value.into())
    }

    pub fn matches_regex(&self, pattern: impl Into<Expression>) -> BooleanExpression {
        self.compare(ComparisonOperator::Regex, pattern.into())
    }

    pub fn is_null(&self) -> BooleanExpression {
        BooleanExpression::NullCheck {
            operand: Box::new(self.clone()),
            negated: false,
        }
    }

    pub fn is_not_null(&self) -> BooleanExpression {
        BooleanExpression::NullCheck {
            operand: Box::new(self.clone()),
            negated: true,
        }
    }

    /// 与运行时值比较相等，`null`、对象、非有限浮点返回 `InvalidArgument`
    pub fn try_eq(&self, value: &Value) -> DslResult<BooleanExpression> {
        self.try_compare(ComparisonOperator::Equal, value)
    }

    /// 与运行时值比较不等，规则同 [`Expression::try_eq`]
    pub fn try_ne(&self, value: &Value) -> DslResult<BooleanExpression> {
        self.try_compare(ComparisonOperator::NotEqual, value)
    }

    fn try_compare(
        &self,
        operator: ComparisonOperator,
        value: &Value,
    ) -> DslResult<BooleanExpression> {
        let literal = Literal::from_value(value).map_err(|e| {
            log::warn!("拒绝 {} 的操作数 {}: {}", operator.name(), value, e);
            e
        })?;
        Ok(self.compare(operator, Expression::Literal(literal)))
    }
}
