//! MATCH 子句

use crate::query::ast::Pattern;
use crate::query::clauses::{render_list, Clause};
use crate::query::render::{impl_display_via_render, Render, Renderer};

/// MATCH 子句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchClause {
    pub patterns: Vec<Pattern>,
    pub optional: bool,
}

impl MatchClause {
    pub fn new<I, T>(patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            optional: false,
        }
    }

    /// `OPTIONAL MATCH`
    pub fn optional<I, T>(patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        Self {
            optional: true,
            ..Self::new(patterns)
        }
    }
}

impl Clause for MatchClause {
    fn keyword(&self) -> &'static str {
        if self.optional {
            "OPTIONAL MATCH"
        } else {
            "MATCH"
        }
    }

    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Render for MatchClause {
    fn render(&self, out: &mut Renderer) {
        render_list(out, self.keyword(), &self.patterns, ",");
    }
}

impl_display_via_render!(MatchClause);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::{named_node, NodePattern, RelationshipPattern};

    fn person(variable: &str) -> NodePattern {
        named_node(variable)
            .and_then(|n| n.with_label("Person"))
            .expect("valid node")
    }

    #[test]
    fn test_match_patterns() {
        let clause = MatchClause::new([person("a"), person("b")]);
        assert_eq!(clause.to_text(), "MATCH (a:Person),(b:Person)");
    }

    #[test]
    fn test_optional_match() {
        let pattern = Pattern::new(person("a")).then(
            RelationshipPattern::outgoing()
                .with_type("KNOWS")
                .expect("valid relationship"),
            named_node("f").expect("valid node"),
        );
        let clause = MatchClause::optional([pattern]);
        assert_eq!(clause.to_text(), "OPTIONAL MATCH (a:Person)-[:KNOWS]->(f)");
    }

    #[test]
    fn test_empty_match() {
        let clause = MatchClause::new(Vec::<Pattern>::new());
        assert!(clause.is_empty());
        assert_eq!(clause.to_text(), "");
    }
}
