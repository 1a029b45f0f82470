//! 子句模块
//!
//! 包含所有子句的定义以及共享的列表渲染逻辑

pub mod create_clause;
pub mod delete_clause;
pub mod match_clause;
pub mod order_by;
pub mod return_clause;
pub mod set_clause;
pub mod skip_limit;
pub mod where_clause;

pub use create_clause::*;
pub use delete_clause::*;
pub use match_clause::*;
pub use order_by::*;
pub use return_clause::*;
pub use set_clause::*;
pub use skip_limit::*;
pub use where_clause::*;

use crate::query::render::{Render, Renderer};

/// 子句
///
/// 子句在构造后不可变，没有子元素时不输出任何字符
pub trait Clause: Render {
    /// 子句关键字，包含修饰词（如 `OPTIONAL MATCH`）
    fn keyword(&self) -> &'static str;

    /// 没有子元素
    fn is_empty(&self) -> bool;
}

/// 渲染 `<keyword> <child><sep><child>...`
///
/// 子元素为空时什么都不写；缓冲区已有内容时先写一个空格。
/// 分隔符原样写入，不额外补空格。
pub fn render_list<T: Render>(out: &mut Renderer, keyword: &str, children: &[T], separator: &str) {
    if children.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(keyword);
    out.push(' ');
    out.write_separated(children, separator);
}
