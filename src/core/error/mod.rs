//! 统一错误处理系统 for cypherdsl
//!
//! 所有错误都在构造阶段产生：表达式、模式和子句一旦构造成功，渲染就不会失败。
//!
//! - `InvalidArgument`：不支持的字面量类型、空值操作数、空的标识符/标签/参数名
//! - `UnsupportedClauseCombination`：为语义校验层预留，本 crate 不会产生
//! - `Config`：配置项无法解析

use thiserror::Error;

/// 统一的 DSL 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DslError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("不支持的子句组合: {0}")]
    UnsupportedClauseCombination(String),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type DslResult<T> = Result<T, DslError>;

impl DslError {
    /// 创建无效参数错误
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        DslError::InvalidArgument(message.into())
    }

    /// 是否为参数错误
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DslError::InvalidArgument(_))
    }
}

impl From<toml::de::Error> for DslError {
    fn from(err: toml::de::Error) -> Self {
        DslError::Config(err.to_string())
    }
}
