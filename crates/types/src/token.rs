//! The token tree handed over by the markup parser.
//!
//! A [`Token`] is a node in a shallow tree: block-level tokens form the
//! document's top-level sequence, and inline containers own their inline
//! children. Open/close markers are paired by `nesting` rather than by
//! ownership, which is how the parser emits them.

use serde::{Deserialize, Serialize};

/// The closed set of token kinds every pass matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenKind {
    /// Literal text. Always a leaf.
    Text,
    /// A raw HTML fragment emitted verbatim. Always a leaf.
    InlineHtml,
    /// Opening marker of a heading.
    HeadingOpen { level: u8 },
    /// Closing marker of a heading.
    HeadingClose { level: u8 },
    ParagraphOpen,
    ParagraphClose,
    /// An image. `content` holds the alt text, `src` the path. Always a leaf.
    Image,
    /// An inline code span. Always a leaf.
    CodeInline,
    /// A container for inline content; `content` holds the raw inline source.
    Inline,
    /// Any other block construct, identified by [`Token::tag`].
    Block,
}

impl TokenKind {
    /// Kinds that must never carry children.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            TokenKind::Text | TokenKind::InlineHtml | TokenKind::Image | TokenKind::CodeInline
        )
    }

    /// The nesting implied by the kind. `Block` tokens carry their own.
    pub fn default_nesting(self) -> i8 {
        match self {
            TokenKind::HeadingOpen { .. } | TokenKind::ParagraphOpen => 1,
            TokenKind::HeadingClose { .. } | TokenKind::ParagraphClose => -1,
            TokenKind::Text
            | TokenKind::InlineHtml
            | TokenKind::Image
            | TokenKind::CodeInline
            | TokenKind::Inline
            | TokenKind::Block => 0,
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Element name for `Block` tokens (`ul`, `li`, `blockquote`, ...).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(default)]
    pub content: String,
    /// Ordered attributes. Keys are not required to be unique.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
    /// +1 for opening markers, -1 for closing markers, 0 otherwise.
    #[serde(default)]
    pub nesting: i8,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            tag: String::new(),
            content: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            nesting: kind.default_nesting(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(TokenKind::Text).with_content(content)
    }

    pub fn inline_html(html: impl Into<String>) -> Self {
        Self::new(TokenKind::InlineHtml).with_content(html)
    }

    pub fn code_inline(code: impl Into<String>) -> Self {
        Self::new(TokenKind::CodeInline).with_content(code)
    }

    /// An image token the way the parser emits it: `src` and an empty `alt`
    /// attribute, with the alt text carried in `content`.
    pub fn image(src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Image).with_content(alt_text);
        token.push_attr("src", src);
        token.push_attr("alt", "");
        token
    }

    pub fn inline(source: impl Into<String>, children: Vec<Token>) -> Self {
        let mut token = Self::new(TokenKind::Inline).with_content(source);
        token.children = children;
        token
    }

    pub fn heading_open(level: u8) -> Self {
        Self::new(TokenKind::HeadingOpen { level })
    }

    pub fn heading_close(level: u8) -> Self {
        Self::new(TokenKind::HeadingClose { level })
    }

    pub fn paragraph_open() -> Self {
        Self::new(TokenKind::ParagraphOpen)
    }

    pub fn paragraph_close() -> Self {
        Self::new(TokenKind::ParagraphClose)
    }

    pub fn block_open(tag: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Block);
        token.tag = tag.into();
        token.nesting = 1;
        token
    }

    pub fn block_close(tag: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Block);
        token.tag = tag.into();
        token.nesting = -1;
        token
    }

    /// A self-contained block. A non-empty `content` is raw HTML emitted as is.
    pub fn block(tag: impl Into<String>, content: impl Into<String>) -> Self {
        let mut token = Self::new(TokenKind::Block).with_content(content);
        token.tag = tag.into();
        token
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attr(key, value);
        self
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends an attribute, even if one with the same key exists.
    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((key.into(), value.into()));
    }

    /// Replaces the first attribute named `key`, or appends it.
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    /// A leaf kind that nonetheless carries children.
    pub fn is_malformed_leaf(&self) -> bool {
        self.kind.is_leaf() && !self.children.is_empty()
    }
}
