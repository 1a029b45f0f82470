use crate::core::error::{DslError, DslResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 字符串字面量使用的引号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn quote_char(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// 标识符渲染策略
///
/// `Escape` 对不符合标识符语法或与关键字冲突的名字加反引号，
/// `Raw` 原样输出，由调用方保证合法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierPolicy {
    #[default]
    Escape,
    Raw,
}

/// 渲染选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    pub quote_style: QuoteStyle,
    pub identifier_policy: IdentifierPolicy,
}

impl RenderOptions {
    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    pub fn with_identifier_policy(mut self, identifier_policy: IdentifierPolicy) -> Self {
        self.identifier_policy = identifier_policy;
        self
    }
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "cypherdsl".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
    pub log: LogConfig,
}

impl Config {
    /// 从 TOML 文本解析配置，缺省项使用默认值
    pub fn parse(content: &str) -> DslResult<Self> {
        let config: Config = toml::from_str(content)?;
        if config.log.max_files == 0 {
            return Err(DslError::Config("log.max_files 必须大于 0".to_string()));
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Config::parse(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
