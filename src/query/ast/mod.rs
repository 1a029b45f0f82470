//! Cypher AST模块
//!
//! 表达式、布尔表达式、排序项和模式的定义及渲染

pub mod boolean;
pub mod expressions;
pub mod order_by;
pub mod patterns;

// 重新导出主要类型
pub use boolean::BooleanExpression;
pub use expressions::{
    count, function, identifier, literal, param, property, Expression, FiniteFloat, FunctionCall,
    Identifier, Literal, PropertyExpression,
};
pub use order_by::{OrderByExpression, OrderTarget, SortDirection};
pub use patterns::{
    named_node, node, Direction, NodePattern, Pattern, PatternSegment, Range, RelationshipPattern,
};
