//! Cypher模式定义

use crate::core::error::{DslError, DslResult};
use crate::query::ast::expressions::{Expression, Identifier};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// 模式定义，可选地绑定到路径变量
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub path_variable: Option<Identifier>,
    pub start: NodePattern,
    pub segments: Vec<PatternSegment>,
}

/// 模式中的一段：关系及其终点
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSegment {
    pub relationship: RelationshipPattern,
    pub node: NodePattern,
}

/// 节点模式
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePattern {
    pub variable: Option<Identifier>,
    pub labels: Vec<Identifier>,
    pub properties: Vec<(Identifier, Expression)>,
}

/// 关系模式
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern {
    pub direction: Direction,
    pub variable: Option<Identifier>,
    pub types: Vec<Identifier>,
    pub properties: Vec<(Identifier, Expression)>,
    pub range: Option<Range>,
}

/// 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Both,
}

/// 可变长度范围，下界不大于上界
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: Option<u32>,
    end: Option<u32>,
}

impl Range {
    pub fn new(start: Option<u32>, end: Option<u32>) -> DslResult<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(DslError::invalid_argument(format!(
                    "无效的路径长度范围: {}..{}",
                    s, e
                )));
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Option<u32> {
        self.start
    }

    pub fn end(&self) -> Option<u32> {
        self.end
    }
}

/// 空节点 `()`
pub fn node() -> NodePattern {
    NodePattern::default()
}

/// 带变量的节点 `(variable)`
pub fn named_node(variable: impl Into<String>) -> DslResult<NodePattern> {
    node().with_variable(variable)
}

impl NodePattern {
    pub fn with_variable(mut self, variable: impl Into<String>) -> DslResult<Self> {
        self.variable = Some(Identifier::new(variable)?);
        Ok(self)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> DslResult<Self> {
        self.labels.push(Identifier::new(label)?);
        Ok(self)
    }

    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<Expression>,
    ) -> DslResult<Self> {
        self.properties.push((Identifier::new(key)?, value.into()));
        Ok(self)
    }

    /// 该节点变量的引用表达式
    pub fn as_expression(&self) -> DslResult<Expression> {
        self.variable
            .clone()
            .map(Expression::Identifier)
            .ok_or_else(|| DslError::invalid_argument("节点模式没有绑定变量"))
    }
}

impl RelationshipPattern {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            variable: None,
            types: Vec::new(),
            properties: Vec::new(),
            range: None,
        }
    }

    pub fn outgoing() -> Self {
        Self::new(Direction::Right)
    }

    pub fn incoming() -> Self {
        Self::new(Direction::Left)
    }

    pub fn undirected() -> Self {
        Self::new(Direction::Both)
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> DslResult<Self> {
        self.variable = Some(Identifier::new(variable)?);
        Ok(self)
    }

    pub fn with_type(mut self, rel_type: impl Into<String>) -> DslResult<Self> {
        self.types.push(Identifier::new(rel_type)?);
        Ok(self)
    }

    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<Expression>,
    ) -> DslResult<Self> {
        self.properties.push((Identifier::new(key)?, value.into()));
        Ok(self)
    }

    /// 可变长度 `*start..end`，`start` 不能大于 `end`
    pub fn with_range(mut self, start: Option<u32>, end: Option<u32>) -> DslResult<Self> {
        self.range = Some(Range::new(start, end)?);
        Ok(self)
    }

    fn has_detail(&self) -> bool {
        self.variable.is_some()
            || !self.types.is_empty()
            || !self.properties.is_empty()
            || self.range.is_some()
    }
}

impl Pattern {
    pub fn new(start: NodePattern) -> Self {
        Self {
            path_variable: None,
            start,
            segments: Vec::new(),
        }
    }

    /// 追加一段关系和终点节点
    pub fn then(mut self, relationship: RelationshipPattern, node: NodePattern) -> Self {
        self.segments.push(PatternSegment { relationship, node });
        self
    }

    /// 绑定路径变量 `p = (...)`
    pub fn with_path_variable(mut self, variable: impl Into<String>) -> DslResult<Self> {
        self.path_variable = Some(Identifier::new(variable)?);
        Ok(self)
    }
}

impl From<NodePattern> for Pattern {
    fn from(value: NodePattern) -> Self {
        Pattern::new(value)
    }
}

/// `{key: value, ...}`，前面已有内容时先写一个空格
fn render_properties(out: &mut Renderer, properties: &[(Identifier, Expression)], spaced: bool) {
    if properties.is_empty() {
        return;
    }
    if spaced {
        out.push(' ');
    }
    out.push('{');
    for (i, (key, value)) in properties.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        key.render(out);
        out.push_str(": ");
        value.render(out);
    }
    out.push('}');
}

impl Render for NodePattern {
    fn render(&self, out: &mut Renderer) {
        out.push('(');
        if let Some(variable) = &self.variable {
            variable.render(out);
        }
        for label in &self.labels {
            out.push(':');
            label.render(out);
        }
        let spaced = self.variable.is_some() || !self.labels.is_empty();
        render_properties(out, &self.properties, spaced);
        out.push(')');
    }
}

impl Render for Range {
    fn render(&self, out: &mut Renderer) {
        out.push('*');
        match (self.start, self.end) {
            (Some(s), Some(e)) if s == e => out.push_str(&s.to_string()),
            (None, None) => {}
            (start, end) => {
                if let Some(s) = start {
                    out.push_str(&s.to_string());
                }
                out.push_str("..");
                if let Some(e) = end {
                    out.push_str(&e.to_string());
                }
            }
        }
    }
}

impl Render for RelationshipPattern {
    fn render(&self, out: &mut Renderer) {
        out.push_str(if self.direction == Direction::Left { "<-" } else { "-" });
        if self.has_detail() {
            out.push('[');
            if let Some(variable) = &self.variable {
                variable.render(out);
            }
            for (i, rel_type) in self.types.iter().enumerate() {
                out.push(if i == 0 { ':' } else { '|' });
                rel_type.render(out);
            }
            if let Some(range) = &self.range {
                range.render(out);
            }
            let spaced = self.variable.is_some() || !self.types.is_empty() || self.range.is_some();
            render_properties(out, &self.properties, spaced);
            out.push(']');
        }
        out.push_str(if self.direction == Direction::Right { "->" } else { "-" });
    }
}

impl Render for PatternSegment {
    fn render(&self, out: &mut Renderer) {
        self.relationship.render(out);
        self.node.render(out);
    }
}

impl Render for Pattern {
    fn render(&self, out: &mut Renderer) {
        if let Some(variable) = &self.path_variable {
            variable.render(out);
            out.push_str(" = ");
        }
        self.start.render(out);
        for segment in &self.segments {
            segment.render(out);
        }
    }
}

impl_display_via_render!(Pattern, NodePattern, RelationshipPattern);

#[cfg(test)]
mod tests {
    use super::*;

    fn person(variable: &str) -> NodePattern {
        named_node(variable)
            .and_then(|n| n.with_label("Person"))
            .expect("valid node")
    }

    #[test]
    fn test_node_pattern_rendering() {
        assert_eq!(node().to_text(), "()");
        assert_eq!(person("n").to_text(), "(n:Person)");

        let alice = person("n")
            .with_property("name", "Alice")
            .and_then(|n| n.with_property("age", 25))
            .expect("valid node");
        assert_eq!(alice.to_text(), "(n:Person {name: 'Alice', age: 25})");

        let anonymous = node().with_property("id", 1).expect("valid node");
        assert_eq!(anonymous.to_text(), "({id: 1})");

        let since = RelationshipPattern::outgoing()
            .with_property("since", 2020)
            .expect("valid relationship");
        assert_eq!(since.to_text(), "-[{since: 2020}]->");
    }

    #[test]
    fn test_relationship_directions() {
        let a = person("a");
        let b = person("b");
        let knows = RelationshipPattern::outgoing()
            .with_variable("r")
            .and_then(|r| r.with_type("KNOWS"))
            .expect("valid relationship");

        let pattern = Pattern::new(a.clone()).then(knows, b.clone());
        assert_eq!(pattern.to_text(), "(a:Person)-[r:KNOWS]->(b:Person)");

        let pattern = Pattern::new(a.clone()).then(RelationshipPattern::incoming(), b.clone());
        assert_eq!(pattern.to_text(), "(a:Person)<--(b:Person)");

        let pattern = Pattern::new(a).then(RelationshipPattern::undirected(), b);
        assert_eq!(pattern.to_text(), "(a:Person)--(b:Person)");
    }

    #[test]
    fn test_relationship_types_and_range() {
        let rel = RelationshipPattern::outgoing()
            .with_type("KNOWS")
            .and_then(|r| r.with_type("LIKES"))
            .and_then(|r| r.with_range(Some(1), Some(3)))
            .expect("valid relationship");
        assert_eq!(rel.to_text(), "-[:KNOWS|LIKES*1..3]->");

        let any_length = RelationshipPattern::outgoing()
            .with_range(None, None)
            .expect("valid relationship");
        assert_eq!(any_length.to_text(), "-[*]->");

        let exact = RelationshipPattern::outgoing()
            .with_range(Some(2), Some(2))
            .expect("valid relationship");
        assert_eq!(exact.to_text(), "-[*2]->");

        assert!(RelationshipPattern::outgoing()
            .with_range(Some(3), Some(1))
            .is_err());
    }

    #[test]
    fn test_path_variable() {
        let pattern = Pattern::new(person("a"))
            .then(RelationshipPattern::outgoing(), node())
            .with_path_variable("p")
            .expect("valid pattern");
        assert_eq!(pattern.to_text(), "p = (a:Person)-->()");
    }

    #[test]
    fn test_escaped_labels() {
        let n = named_node("n")
            .and_then(|n| n.with_label("Big Company"))
            .expect("valid node");
        assert_eq!(n.to_text(), "(n:`Big Company`)");
        assert!(node().with_label("").is_err());
    }

    #[test]
    fn test_range_validated_on_construction() {
        assert!(Range::new(Some(3), Some(1)).is_err());

        let range = Range::new(Some(1), None).expect("valid range");
        assert_eq!(range.start(), Some(1));
        assert_eq!(range.end(), None);
        assert_eq!(range.to_text(), "*1..");

        let mut rel = RelationshipPattern::outgoing();
        rel.range = Some(Range::new(None, Some(4)).expect("valid range"));
        assert_eq!(rel.to_text(), "-[*..4]->");
    }

    #[test]
    fn test_node_as_expression() {
        let n = person("n");
        let reference = n.as_expression().expect("bound variable");
        assert_eq!(reference.to_text(), "n");
        assert_eq!(reference.property("name").expect("property").to_text(), "n.name");

        let err = node().as_expression().expect_err("anonymous node");
        assert!(err.is_invalid_argument());
    }
}
