//! 测试数据生成模块

use cypherdsl::prelude::*;

/// 变量引用
pub fn var(name: &str) -> Expression {
    identifier(name).expect("有效的标识符")
}

/// 属性访问
pub fn prop(variable: &str, key: &str) -> Expression {
    property(variable, key).expect("有效的属性")
}

/// 带标签的节点 `(variable:Label)`
pub fn labeled(variable: &str, label: &str) -> NodePattern {
    named_node(variable)
        .and_then(|n| n.with_label(label))
        .expect("有效的节点模式")
}

/// `(a:Person)-[:KNOWS]->(b:Person)`
pub fn knows_pattern(from: &str, to: &str) -> Pattern {
    let knows = RelationshipPattern::outgoing()
        .with_type("KNOWS")
        .expect("有效的关系模式");
    Pattern::new(labeled(from, "Person")).then(knows, labeled(to, "Person"))
}

/// 社交网络查询模板：成年人及其朋友
pub fn friends_of_adults() -> Query {
    let age = prop("a", "age");
    Query::new()
        .matching([knows_pattern("a", "b")])
        .filter([age.gte(18)])
        .returns([prop("a", "name"), prop("b", "name")])
        .order_by([prop("a", "name")])
}
