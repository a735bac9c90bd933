//! Builds a [`Document`] from a CommonMark event stream.
//!
//! Block structure comes out flat, the way a markdown-it style parser emits
//! it: open and close markers paired by `nesting`, with an `Inline` container
//! holding the children of every heading and paragraph. Headings are also
//! collected into the table-of-contents list.

use docweave_core::escape::escape_html;
use docweave_types::{Document, TocEntry, Token};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// A parsed page: its token tree and its headings in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMarkdown {
    pub document: Document,
    pub toc: Vec<TocEntry>,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Parses `source` into a token tree plus its heading list.
pub fn parse_markdown(source: &str) -> ParsedMarkdown {
    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(source, options()) {
        builder.event(event);
    }
    let parsed = builder.finish();
    log::debug!(
        "Parsed {} top-level tokens and {} headings",
        parsed.document.len(),
        parsed.toc.len()
    );
    parsed
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[derive(Debug)]
struct PendingImage {
    src: String,
    title: String,
    alt: String,
    /// Images nested inside this one's alt text.
    depth: usize,
}

/// Inline children collected for the current container.
#[derive(Debug, Default)]
struct InlineBuffer {
    source: String,
    children: Vec<Token>,
    image: Option<PendingImage>,
}

impl InlineBuffer {
    fn text(&mut self, text: &str) {
        match &mut self.image {
            Some(image) => image.alt.push_str(text),
            None => {
                self.source.push_str(text);
                self.children.push(Token::text(text));
            }
        }
    }

    fn code(&mut self, code: &str) {
        match &mut self.image {
            Some(image) => image.alt.push_str(code),
            None => {
                self.source.push_str(code);
                self.children.push(Token::code_inline(code));
            }
        }
    }

    /// Markup with no plain-text counterpart. Dropped inside alt text.
    fn html(&mut self, html: impl Into<String>) {
        if self.image.is_none() {
            self.children.push(Token::inline_html(html));
        }
    }

    fn start_image(&mut self, src: &str, title: &str) {
        match &mut self.image {
            Some(image) => image.depth += 1,
            None => {
                self.image = Some(PendingImage {
                    src: src.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                    depth: 0,
                })
            }
        }
    }

    fn end_image(&mut self) {
        let Some(image) = &mut self.image else {
            return;
        };
        if image.depth > 0 {
            image.depth -= 1;
            return;
        }
        if let Some(image) = self.image.take() {
            let mut token = Token::image(image.src, image.alt.as_str());
            if !image.title.is_empty() {
                token.push_attr("title", image.title);
            }
            self.source.push_str(&image.alt);
            self.children.push(token);
        }
    }

    fn into_token(self) -> Token {
        Token::inline(self.source, self.children)
    }
}

/// Raw text collected for a leaf block.
#[derive(Debug)]
enum Capture {
    Code { lang: String, text: String },
    Html(String),
}

#[derive(Debug, Default)]
struct TreeBuilder {
    tokens: Vec<Token>,
    toc: Vec<TocEntry>,
    inline: Option<InlineBuffer>,
    capture: Option<Capture>,
    in_table_head: bool,
}

impl TreeBuilder {
    fn finish(mut self) -> ParsedMarkdown {
        self.flush_inline();
        ParsedMarkdown {
            document: Document::new(self.tokens),
            toc: self.toc,
        }
    }

    /// Inline content outside a paragraph (tight list items, table cells)
    /// gets a container of its own.
    fn inline_buffer(&mut self) -> &mut InlineBuffer {
        self.inline.get_or_insert_with(InlineBuffer::default)
    }

    fn flush_inline(&mut self) {
        if let Some(buffer) = self.inline.take() {
            self.tokens.push(buffer.into_token());
        }
    }

    fn open_block(&mut self, tag: &str) {
        self.flush_inline();
        self.tokens.push(Token::block_open(tag));
    }

    fn close_block(&mut self, tag: &str) {
        self.flush_inline();
        self.tokens.push(Token::block_close(tag));
    }

    fn event(&mut self, event: Event<'_>) {
        if let Some(capture) = &mut self.capture {
            match (capture, &event) {
                (Capture::Code { text, .. }, Event::Text(t)) => {
                    text.push_str(t);
                    return;
                }
                (Capture::Html(html), Event::Html(h) | Event::Text(h)) => {
                    html.push_str(h);
                    return;
                }
                _ => {}
            }
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.inline_buffer().text(&text),
            Event::Code(code) => self.inline_buffer().code(&code),
            Event::InlineHtml(html) | Event::Html(html) => {
                self.inline_buffer().html(html.to_string())
            }
            Event::SoftBreak => self.inline_buffer().text("\n"),
            Event::HardBreak => {
                let buffer = self.inline_buffer();
                buffer.html("<br>");
                buffer.source.push('\n');
            }
            Event::Rule => {
                self.flush_inline();
                self.tokens.push(Token::block("hr", "<hr>"));
            }
            Event::TaskListMarker(checked) => {
                let html = if checked {
                    "<input type=\"checkbox\" checked disabled>"
                } else {
                    "<input type=\"checkbox\" disabled>"
                };
                self.inline_buffer().html(html);
            }
            other => log::trace!("Ignoring markdown event {:?}", other),
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.flush_inline();
                self.tokens.push(Token::paragraph_open());
                self.inline = Some(InlineBuffer::default());
            }
            Tag::Heading { level, .. } => {
                self.flush_inline();
                self.tokens.push(Token::heading_open(heading_level(level)));
                self.inline = Some(InlineBuffer::default());
            }
            Tag::BlockQuote { .. } => self.open_block("blockquote"),
            Tag::List(Some(start)) => {
                self.open_block("ol");
                if start != 1 {
                    if let Some(list) = self.tokens.last_mut() {
                        list.push_attr("start", start.to_string());
                    }
                }
            }
            Tag::List(None) => self.open_block("ul"),
            Tag::Item => self.open_block("li"),
            Tag::Table(_) => self.open_block("table"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.open_block("thead");
                self.open_block("tr");
            }
            Tag::TableRow => self.open_block("tr"),
            Tag::TableCell => {
                let cell = if self.in_table_head { "th" } else { "td" };
                self.open_block(cell);
            }
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                self.capture = Some(Capture::Code {
                    lang,
                    text: String::new(),
                });
            }
            Tag::HtmlBlock => {
                self.flush_inline();
                self.capture = Some(Capture::Html(String::new()));
            }
            Tag::Emphasis => self.inline_buffer().html("<em>"),
            Tag::Strong => self.inline_buffer().html("<strong>"),
            Tag::Strikethrough => self.inline_buffer().html("<del>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut html = format!("<a href=\"{}\"", escape_html(&dest_url));
                if !title.is_empty() {
                    html.push_str(&format!(" title=\"{}\"", escape_html(&title)));
                }
                html.push('>');
                self.inline_buffer().html(html);
            }
            Tag::Image {
                dest_url, title, ..
            } => self.inline_buffer().start_image(&dest_url, &title),
            other => log::trace!("Ignoring markdown block {:?}", other),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_inline();
                self.tokens.push(Token::paragraph_close());
            }
            TagEnd::Heading(level) => {
                let level = heading_level(level);
                let buffer = self.inline.take().unwrap_or_default();
                // Same text the heading id is derived from, so links resolve.
                self.toc.push(TocEntry::new(level, buffer.source.as_str()));
                self.tokens.push(buffer.into_token());
                self.tokens.push(Token::heading_close(level));
            }
            TagEnd::BlockQuote { .. } => self.close_block("blockquote"),
            TagEnd::List(ordered) => self.close_block(if ordered { "ol" } else { "ul" }),
            TagEnd::Item => self.close_block("li"),
            TagEnd::Table => self.close_block("table"),
            TagEnd::TableHead => {
                self.close_block("tr");
                self.close_block("thead");
                self.in_table_head = false;
            }
            TagEnd::TableRow => self.close_block("tr"),
            TagEnd::TableCell => {
                let cell = if self.in_table_head { "th" } else { "td" };
                self.close_block(cell);
            }
            TagEnd::CodeBlock => {
                if let Some(Capture::Code { lang, text }) = self.capture.take() {
                    let class = if lang.is_empty() {
                        String::new()
                    } else {
                        format!(" class=\"language-{}\"", escape_html(&lang))
                    };
                    let html = format!("<pre><code{class}>{}</code></pre>", escape_html(&text));
                    self.tokens.push(Token::block("pre", html));
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(Capture::Html(html)) = self.capture.take() {
                    self.tokens.push(Token::block("html", html));
                }
            }
            TagEnd::Emphasis => self.inline_buffer().html("</em>"),
            TagEnd::Strong => self.inline_buffer().html("</strong>"),
            TagEnd::Strikethrough => self.inline_buffer().html("</del>"),
            TagEnd::Link => self.inline_buffer().html("</a>"),
            TagEnd::Image => self.inline_buffer().end_image(),
            other => log::trace!("Ignoring end of markdown block {:?}", other),
        }
    }
}
