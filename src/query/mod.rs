// 查询构造模块
//
// - ast: 表达式、排序项、模式
// - clauses: 各类子句及共享的列表渲染
// - statement: 按固定槽位组装的查询
// - render: 渲染协议和输出缓冲区

pub mod ast;
pub mod clauses;
pub mod render;
pub mod statement;

pub use render::{Render, Renderer};
pub use statement::{ClauseSlot, Query, QueryClause};
