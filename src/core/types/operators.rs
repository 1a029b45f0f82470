//! 操作符类型定义
//!
//! 定义布尔表达式中使用的比较操作符和逻辑操作符

use serde::{Deserialize, Serialize};

/// 操作符特征定义
pub trait Operator {
    /// 获取操作符在查询文本中的记号
    fn name(&self) -> &str;

    /// 获取操作符的优先级
    fn precedence(&self) -> u8;
}

/// 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // 字符串匹配
    StartsWith,
    EndsWith,
    Contains,
    Regex,
}

impl Operator for ComparisonOperator {
    fn name(&self) -> &str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "<>",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
            ComparisonOperator::StartsWith => "STARTS WITH",
            ComparisonOperator::EndsWith => "ENDS WITH",
            ComparisonOperator::Contains => "CONTAINS",
            ComparisonOperator::Regex => "=~",
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            ComparisonOperator::Equal
            | ComparisonOperator::NotEqual
            | ComparisonOperator::LessThan
            | ComparisonOperator::LessThanOrEqual
            | ComparisonOperator::GreaterThan
            | ComparisonOperator::GreaterThanOrEqual => 5,

            ComparisonOperator::StartsWith
            | ComparisonOperator::EndsWith
            | ComparisonOperator::Contains
            | ComparisonOperator::Regex => 6,
        }
    }
}

/// 逻辑操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
}

impl Operator for LogicalOperator {
    fn name(&self) -> &str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
        }
    }

    fn precedence(&self) -> u8 {
        // Cypher: OR < XOR < AND < NOT
        match self {
            LogicalOperator::Or => 1,
            LogicalOperator::Xor => 2,
            LogicalOperator::And => 3,
        }
    }
}

/// NOT 的优先级，高于所有二元逻辑操作符
pub const NOT_PRECEDENCE: u8 = 4;
