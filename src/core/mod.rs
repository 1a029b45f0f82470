pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{DslError, DslResult};

pub use types::operators::{ComparisonOperator, LogicalOperator, Operator};
