//! Cypher表达式系统
//!
//! 表达式构造后不可变，所有构造方法都返回新节点。

use crate::core::error::{DslError, DslResult};
use crate::query::ast::boolean::BooleanExpression;
use crate::query::render::{impl_display_via_render, Render, Renderer};
use crate::utils::string_utils::is_valid_identifier;
use serde_json::Value;

/// 表达式
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
    Property(PropertyExpression),
    Parameter(Identifier),
    FunctionCall(FunctionCall),
    Boolean(BooleanExpression),
}

/// 字面量
///
/// 不存在空值字面量，空值判断通过 `is_null` / `is_not_null` 表达
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(FiniteFloat),
    Boolean(bool),
    List(Vec<Literal>),
}

/// 有限浮点数，只能通过 [`FiniteFloat::new`] 构造
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FiniteFloat(f64);

impl FiniteFloat {
    /// 拒绝 NaN 和无穷
    pub fn new(value: f64) -> DslResult<Self> {
        if !value.is_finite() {
            return Err(DslError::invalid_argument(format!(
                "浮点字面量必须是有限值: {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for FiniteFloat {
    type Error = DslError;

    fn try_from(value: f64) -> DslResult<Self> {
        FiniteFloat::new(value)
    }
}

/// 标识符（变量名、标签名、属性键）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
}

/// 属性表达式 `owner.key`
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyExpression {
    pub owner: Box<Expression>,
    pub key: Identifier,
}

/// 函数调用
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    name: String,
    distinct: bool,
    arguments: Vec<Expression>,
}

impl Literal {
    /// 浮点字面量，拒绝 NaN 和无穷
    pub fn float(value: f64) -> DslResult<Self> {
        FiniteFloat::new(value).map(Literal::Float)
    }

    /// 从运行时值构造字面量
    ///
    /// 支持字符串、整数、有限浮点、布尔以及由它们组成的数组；
    /// `null` 和对象返回 `InvalidArgument`。
    pub fn from_value(value: &Value) -> DslResult<Self> {
        match value {
            Value::String(s) => Ok(Literal::String(s.clone())),
            Value::Bool(b) => Ok(Literal::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Literal::Integer(i))
                } else if n.is_u64() {
                    Err(DslError::invalid_argument(format!("整数超出范围: {}", n)))
                } else {
                    let f = n
                        .as_f64()
                        .ok_or_else(|| DslError::invalid_argument(format!("无效数值: {}", n)))?;
                    Literal::float(f)
                }
            }
            Value::Array(items) => items
                .iter()
                .map(Literal::from_value)
                .collect::<DslResult<Vec<_>>>()
                .map(Literal::List),
            Value::Null => Err(DslError::invalid_argument("操作数不能为空值")),
            Value::Object(_) => Err(DslError::invalid_argument("不支持的字面量类型: object")),
        }
    }
}

impl Identifier {
    /// 创建标识符，名字不能为空
    pub fn new(name: impl Into<String>) -> DslResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DslError::invalid_argument("标识符不能为空"));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FunctionCall {
    /// 创建函数调用，函数名可带命名空间（如 `apoc.coll.sum`）
    pub fn new(name: impl Into<String>, arguments: Vec<Expression>) -> DslResult<Self> {
        let name = name.into();
        if name.is_empty() || !name.split('.').all(is_valid_identifier) {
            return Err(DslError::invalid_argument(format!("无效函数名: '{}'", name)));
        }
        Ok(Self {
            name,
            distinct: false,
            arguments,
        })
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

/// 变量引用
pub fn identifier(name: impl Into<String>) -> DslResult<Expression> {
    Identifier::new(name).map(Expression::Identifier)
}

/// 属性访问 `variable.key`
pub fn property(variable: impl Into<String>, key: impl Into<String>) -> DslResult<Expression> {
    identifier(variable)?.property(key)
}

/// 查询参数 `$name`
pub fn param(name: impl Into<String>) -> DslResult<Expression> {
    Identifier::new(name).map(Expression::Parameter)
}

/// 字面量表达式
pub fn literal(value: impl Into<Literal>) -> Expression {
    Expression::Literal(value.into())
}

/// 函数调用表达式
pub fn function(name: impl Into<String>, arguments: Vec<Expression>) -> DslResult<Expression> {
    FunctionCall::new(name, arguments).map(Expression::FunctionCall)
}

/// `count(expr)`
pub fn count(expression: Expression) -> Expression {
    Expression::FunctionCall(FunctionCall {
        name: "count".to_string(),
        distinct: false,
        arguments: vec![expression],
    })
}

impl Expression {
    /// 在当前表达式上访问属性
    pub fn property(&self, key: impl Into<String>) -> DslResult<Expression> {
        Ok(Expression::Property(PropertyExpression {
            owner: Box::new(self.clone()),
            key: Identifier::new(key)?,
        }))
    }

    /// 绑定强度，原子表达式最高
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Expression::Boolean(boolean) => boolean.precedence(),
            _ => u8::MAX,
        }
    }

    /// 渲染操作数，绑定强度低于 `min_precedence` 时加括号
    pub(crate) fn render_operand(&self, out: &mut Renderer, min_precedence: u8) {
        if self.precedence() < min_precedence {
            out.push('(');
            self.render(out);
            out.push(')');
        } else {
            self.render(out);
        }
    }
}

impl Render for Literal {
    fn render(&self, out: &mut Renderer) {
        match self {
            Literal::String(s) => out.write_string_literal(s),
            Literal::Integer(i) => out.push_str(&i.to_string()),
            Literal::Float(f) => {
                let text = f.get().to_string();
                out.push_str(&text);
                // 保证重新解析后仍是浮点数
                if !text.contains('.') {
                    out.push_str(".0");
                }
            }
            Literal::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Literal::List(items) => {
                out.push('[');
                out.write_separated(items, ", ");
                out.push(']');
            }
        }
    }
}

impl Render for Identifier {
    fn render(&self, out: &mut Renderer) {
        out.write_identifier(&self.name);
    }
}

impl Render for FunctionCall {
    fn render(&self, out: &mut Renderer) {
        out.push_str(&self.name);
        out.push('(');
        if self.distinct {
            out.push_str("DISTINCT ");
        }
        out.write_separated(&self.arguments, ", ");
        out.push(')');
    }
}

impl Render for PropertyExpression {
    fn render(&self, out: &mut Renderer) {
        self.owner.render_operand(out, u8::MAX);
        out.push('.');
        self.key.render(out);
    }
}

impl Render for Expression {
    fn render(&self, out: &mut Renderer) {
        match self {
            Expression::Literal(literal) => literal.render(out),
            Expression::Identifier(identifier) => identifier.render(out),
            Expression::Property(property) => property.render(out),
            Expression::Parameter(name) => {
                out.push('$');
                name.render(out);
            }
            Expression::FunctionCall(call) => call.render(out),
            Expression::Boolean(boolean) => boolean.render(out),
        }
    }
}

impl_display_via_render!(Expression, Literal, Identifier);

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

/// 可无损转换为 `i64` 的整数类型
macro_rules! impl_from_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Integer(i64::from(value))
                }
            }

            impl From<$ty> for Expression {
                fn from(value: $ty) -> Self {
                    Expression::Literal(value.into())
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(values: Vec<T>) -> Self {
        Literal::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::Literal(value)
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<Identifier> for Expression {
    fn from(value: Identifier) -> Self {
        Expression::Identifier(value)
    }
}

impl From<PropertyExpression> for Expression {
    fn from(value: PropertyExpression) -> Self {
        Expression::Property(value)
    }
}

impl From<FiniteFloat> for Literal {
    fn from(value: FiniteFloat) -> Self {
        Literal::Float(value)
    }
}

impl From<FiniteFloat> for Expression {
    fn from(value: FiniteFloat) -> Self {
        Expression::Literal(value.into())
    }
}

impl From<FunctionCall> for Expression {
    fn from(value: FunctionCall) -> Self {
        Expression::FunctionCall(value)
    }
}

impl From<&Expression> for Expression {
    fn from(value: &Expression) -> Self {
        value.clone()
    }
}
