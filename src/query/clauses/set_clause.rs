//! SET 子句

use crate::core::error::{DslError, DslResult};
use crate::query::ast::{Expression, Identifier, PropertyExpression};
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// SET 子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetClause {
    pub items: Vec<SetItem>,
}

/// SET项
#[derive(Debug, Clone, PartialEq)]
pub enum SetItem {
    /// `n.key = value`
    Property {
        target: PropertyExpression,
        value: Expression,
    },
    /// `n:Label1:Label2`
    Labels(LabelAssignment),
}

/// 为变量添加的标签，至少一个，只能通过 [`SetItem::labels`] 构造
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAssignment {
    variable: Identifier,
    labels: Vec<Identifier>,
}

impl LabelAssignment {
    pub fn variable(&self) -> &Identifier {
        &self.variable
    }

    pub fn labels(&self) -> &[Identifier] {
        &self.labels
    }
}

impl SetItem {
    /// 属性赋值，目标必须是属性表达式
    pub fn property(target: &Expression, value: impl Into<Expression>) -> DslResult<Self> {
        match target {
            Expression::Property(property) => Ok(SetItem::Property {
                target: property.clone(),
                value: value.into(),
            }),
            other => Err(DslError::invalid_argument(format!(
                "SET 目标必须是属性表达式: {}",
                other
            ))),
        }
    }

    /// 添加标签，至少一个
    pub fn labels<I, S>(variable: impl Into<String>, labels: I) -> DslResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels
            .into_iter()
            .map(Identifier::new)
            .collect::<DslResult<Vec<_>>>()?;
        if labels.is_empty() {
            return Err(DslError::invalid_argument("SET 标签列表不能为空"));
        }
        Ok(SetItem::Labels(LabelAssignment {
            variable: Identifier::new(variable)?,
            labels,
        }))
    }
}

impl Render for SetItem {
    fn render(&self, out: &mut Renderer) {
        match self {
            SetItem::Property { target, value } => {
                target.render(out);
                out.push_str(" = ");
                value.render(out);
            }
            SetItem::Labels(assignment) => {
                assignment.variable.render(out);
                for label in &assignment.labels {
                    out.push(':');
                    label.render(out);
                }
            }
        }
    }
}

impl SetClause {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SetItem>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl Clause for SetClause {
    fn keyword(&self) -> &'static str {
        "SET"
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Render for SetClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.items, ",");
    }
}

impl_display_via_render!(SetClause);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::{identifier, param, property};

    #[test]
    fn test_set_property_and_labels() {
        let age = property("n", "age").expect("property");
        let clause = SetClause::new([
            SetItem::property(&age, 31).expect("property target"),
            SetItem::property(
                &property("n", "email").expect("property"),
                param("email").expect("param"),
            )
            .expect("property target"),
            SetItem::labels("n", ["Adult", "Member"]).expect("labels"),
        ]);
        assert_eq!(
            clause.to_text(),
            "SET n.age = 31,n.email = $email,n:Adult:Member"
        );
    }

    #[test]
    fn test_invalid_targets() {
        let n = identifier("n").expect("identifier");
        assert!(SetItem::property(&n, 1).is_err());
        assert!(SetItem::labels("n", Vec::<String>::new()).is_err());
        assert!(SetItem::labels("n", [""]).is_err());
    }

    #[test]
    fn test_label_assignment_accessors() {
        let item = SetItem::labels("n", ["Adult", "Member"]).expect("labels");
        let SetItem::Labels(assignment) = &item else {
            panic!("应为标签赋值: {:?}", item);
        };
        assert_eq!(assignment.variable().name(), "n");
        let names: Vec<&str> = assignment.labels().iter().map(|l| l.name()).collect();
        assert_eq!(names, ["Adult", "Member"]);
    }
}
