//! Cypher查询语句
//!
//! 查询按固定槽位保存子句，渲染时按槽位顺序输出并跳过空子句。
//! 不做语义校验，例如没有 RETURN 的 ORDER BY 会原样渲染。

use crate::config::RenderOptions;
use crate::query::ast::{BooleanExpression, Expression, OrderTarget, Pattern};
use crate::query::clauses::*;
use crate::query::render::{impl_display_via_render, Render, Renderer};
use std::collections::BTreeMap;

/// 子句槽位，声明顺序即渲染顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseSlot {
    Match,
    OptionalMatch,
    Where,
    Create,
    Set,
    Delete,
    Return,
    OrderBy,
    Skip,
    Limit,
}

/// 可放入查询的子句
#[derive(Debug, Clone, PartialEq)]
pub enum QueryClause {
    Match(MatchClause),
    Where(WhereClause),
    Create(CreateClause),
    Set(SetClause),
    Delete(DeleteClause),
    Return(ReturnClause),
    OrderBy(OrderByClause),
    Skip(SkipClause),
    Limit(LimitClause),
}

impl QueryClause {
    /// 子句所属槽位
    pub fn slot(&self) -> ClauseSlot {
        match self {
            QueryClause::Match(clause) if clause.optional => ClauseSlot::OptionalMatch,
            QueryClause::Match(_) => ClauseSlot::Match,
            QueryClause::Where(_) => ClauseSlot::Where,
            QueryClause::Create(_) => ClauseSlot::Create,
            QueryClause::Set(_) => ClauseSlot::Set,
            QueryClause::Delete(_) => ClauseSlot::Delete,
            QueryClause::Return(_) => ClauseSlot::Return,
            QueryClause::OrderBy(_) => ClauseSlot::OrderBy,
            QueryClause::Skip(_) => ClauseSlot::Skip,
            QueryClause::Limit(_) => ClauseSlot::Limit,
        }
    }

    fn as_clause(&self) -> &dyn Clause {
        match self {
            QueryClause::Match(clause) => clause,
            QueryClause::Where(clause) => clause,
            QueryClause::Create(clause) => clause,
            QueryClause::Set(clause) => clause,
            QueryClause::Delete(clause) => clause,
            QueryClause::Return(clause) => clause,
            QueryClause::OrderBy(clause) => clause,
            QueryClause::Skip(clause) => clause,
            QueryClause::Limit(clause) => clause,
        }
    }
}

impl Clause for QueryClause {
    fn keyword(&self) -> &'static str {
        self.as_clause().keyword()
    }

    fn is_empty(&self) -> bool {
        self.as_clause().is_empty()
    }
}

impl Render for QueryClause {
    fn render(&self, out: &mut Renderer) {
        self.as_clause().render(out)
    }
}

macro_rules! impl_from_clause {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for QueryClause {
                fn from(value: $ty) -> Self {
                    QueryClause::$variant(value)
                }
            }
        )+
    };
}

impl_from_clause!(
    Match(MatchClause),
    Where(WhereClause),
    Create(CreateClause),
    Set(SetClause),
    Delete(DeleteClause),
    Return(ReturnClause),
    OrderBy(OrderByClause),
    Skip(SkipClause),
    Limit(LimitClause),
);

/// 查询
///
/// 通过链式方法按值构造；`Clone` 后可作为模板派生变体，互不影响
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    clauses: BTreeMap<ClauseSlot, QueryClause>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// 放入子句，同一槽位已有子句时替换
    pub fn with_clause(mut self, clause: impl Into<QueryClause>) -> Self {
        let clause = clause.into();
        self.clauses.insert(clause.slot(), clause);
        self
    }

    /// 移除槽位中的子句
    pub fn without(mut self, slot: ClauseSlot) -> Self {
        self.clauses.remove(&slot);
        self
    }

    pub fn clause(&self, slot: ClauseSlot) -> Option<&QueryClause> {
        self.clauses.get(&slot)
    }

    /// 所有槽位都未设置或为空
    pub fn is_empty(&self) -> bool {
        self.clauses.values().all(|clause| clause.is_empty())
    }

    pub fn matching<I, T>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        self.with_clause(MatchClause::new(patterns))
    }

    pub fn optional_matching<I, T>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        self.with_clause(MatchClause::optional(patterns))
    }

    /// WHERE，多个条件以 AND 连接
    pub fn filter<I>(self, conditions: I) -> Self
    where
        I: IntoIterator<Item = BooleanExpression>,
    {
        self.with_clause(WhereClause::new(conditions))
    }

    pub fn create<I, T>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Pattern>,
    {
        self.with_clause(CreateClause::new(patterns))
    }

    pub fn set<I>(self, items: I) -> Self
    where
        I: IntoIterator<Item = SetItem>,
    {
        self.with_clause(SetClause::new(items))
    }

    pub fn delete<I, T>(self, expressions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        self.with_clause(DeleteClause::new(expressions))
    }

    pub fn detach_delete<I, T>(self, expressions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Expression>,
    {
        self.with_clause(DeleteClause::detach(expressions))
    }

    pub fn returns<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReturnItem>,
    {
        self.with_clause(ReturnClause::new(items))
    }

    pub fn returns_distinct<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ReturnItem>,
    {
        self.with_clause(ReturnClause::distinct(items))
    }

    pub fn order_by<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OrderTarget>,
    {
        self.with_clause(OrderByClause::new(items))
    }

    pub fn skip(self, count: u32) -> Self {
        self.with_clause(SkipClause::new(count))
    }

    pub fn limit(self, count: u32) -> Self {
        self.with_clause(LimitClause::new(count))
    }
}

impl Render for Query {
    fn render(&self, out: &mut Renderer) {
        for (slot, clause) in &self.clauses {
            if clause.is_empty() {
                log::trace!("跳过空子句: {:?}", slot);
                continue;
            }
            clause.render(out);
        }
    }

    fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = Renderer::new(*options);
        self.render(&mut out);
        let text = out.finish().trim().to_string();
        log::debug!(
            "渲染查询: {} 个子句, {} 字节",
            self.clauses.len(),
            text.len()
        );
        text
    }
}

impl_display_via_render!(Query);
