//! 渲染协议
//!
//! 每个 AST 节点实现 [`Render`]，把自身的规范文本追加到 [`Renderer`]。
//! 渲染只读取节点状态，同一棵树可以重复、并发渲染。

use crate::config::{IdentifierPolicy, RenderOptions};
use crate::utils::string_utils::{escape_identifier, escape_string_literal};

/// 渲染输出缓冲区
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    buf: String,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            buf: String::new(),
            options,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn push(&mut self, ch: char) {
        self.buf.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// 按标识符策略写入名字
    pub fn write_identifier(&mut self, name: &str) {
        match self.options.identifier_policy {
            IdentifierPolicy::Raw => self.buf.push_str(name),
            IdentifierPolicy::Escape => self.buf.push_str(&escape_identifier(name)),
        }
    }

    /// 写入带引号和转义的字符串字面量
    pub fn write_string_literal(&mut self, value: &str) {
        let quote = self.options.quote_style.quote_char();
        self.buf.push(quote);
        self.buf.push_str(&escape_string_literal(value, quote));
        self.buf.push(quote);
    }

    /// 依次渲染元素，元素之间写入分隔符
    pub fn write_separated<T: Render>(&mut self, items: &[T], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(separator);
            }
            item.render(self);
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// 可渲染节点
pub trait Render {
    /// 把规范文本追加到输出
    fn render(&self, out: &mut Renderer);

    /// 使用指定选项渲染为字符串
    fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = Renderer::new(*options);
        self.render(&mut out);
        out.finish()
    }

    /// 使用默认选项渲染为字符串
    fn to_text(&self) -> String {
        self.render_with(&RenderOptions::default())
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, out: &mut Renderer) {
        (**self).render(out)
    }
}

/// 以默认选项的渲染结果实现 `Display`
macro_rules! impl_display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::query::render::Render::to_text(self))
                }
            }
        )+
    };
}

pub(crate) use impl_display_via_render;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuoteStyle;

    struct Word(&'static str);

    impl Render for Word {
        fn render(&self, out: &mut Renderer) {
            out.write_identifier(self.0);
        }
    }

    #[test]
    fn test_write_separated() {
        let mut out = Renderer::default();
        out.write_separated(&[Word("a"), Word("b"), Word("c")], ",");
        assert_eq!(out.finish(), "a,b,c");
    }

    #[test]
    fn test_identifier_policy() {
        let word = Word("first name");
        assert_eq!(word.to_text(), "`first name`");

        let raw = RenderOptions::default().with_identifier_policy(IdentifierPolicy::Raw);
        assert_eq!(word.render_with(&raw), "first name");
    }

    /// 按当前引号风格选择写法的节点
    struct QuoteAware;

    impl Render for QuoteAware {
        fn render(&self, out: &mut Renderer) {
            let text = match out.options().quote_style {
                QuoteStyle::Single => "single",
                QuoteStyle::Double => "double",
            };
            out.push_str(text);
        }
    }

    #[test]
    fn test_options_visible_to_nodes() {
        assert_eq!(QuoteAware.to_text(), "single");
        let double = RenderOptions::default().with_quote_style(QuoteStyle::Double);
        assert_eq!(QuoteAware.render_with(&double), "double");
        assert_eq!(Renderer::new(double).options(), &double);
    }

    #[test]
    fn test_string_literal_quote_style() {
        let mut out = Renderer::default();
        out.write_string_literal("it's");
        assert_eq!(out.as_str(), "'it\\'s'");

        let mut out = Renderer::new(RenderOptions::default().with_quote_style(QuoteStyle::Double));
        out.write_string_literal("it's");
        assert_eq!(out.finish(), "\"it's\"");
    }
}
