//! HTML serialization of the token tree.

use docweave_core::escape::escape_html;
use docweave_types::{Document, Token, TokenKind};

/// Serializes a document to HTML.
///
/// Text is escaped, `InlineHtml` is emitted verbatim and attributes are
/// written in stored order. Leaf `Block` tokens with content are raw HTML.
pub fn render_html(doc: &Document) -> String {
    let mut out = String::new();
    for token in &doc.tokens {
        render_token(token, &mut out);
    }
    out
}

fn push_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
}

fn render_token(token: &Token, out: &mut String) {
    match token.kind {
        TokenKind::HeadingOpen { level } => {
            out.push_str(&format!("<h{level}"));
            push_attrs(out, &token.attrs);
            out.push('>');
        }
        TokenKind::HeadingClose { level } => out.push_str(&format!("</h{level}>\n")),
        TokenKind::ParagraphOpen => {
            out.push_str("<p");
            push_attrs(out, &token.attrs);
            out.push('>');
        }
        TokenKind::ParagraphClose => out.push_str("</p>\n"),
        TokenKind::Inline => {
            for child in &token.children {
                render_token(child, out);
            }
        }
        TokenKind::Text => out.push_str(&escape_html(&token.content)),
        TokenKind::InlineHtml => out.push_str(&token.content),
        TokenKind::CodeInline => {
            out.push_str("<code");
            push_attrs(out, &token.attrs);
            out.push('>');
            out.push_str(&escape_html(&token.content));
            out.push_str("</code>");
        }
        TokenKind::Image => render_image(token, out),
        TokenKind::Block => render_block(token, out),
    }
}

/// An empty `alt` attribute takes the alt text from the token's content.
fn render_image(token: &Token, out: &mut String) {
    out.push_str("<img");
    for (key, value) in &token.attrs {
        let value = if key == "alt" && value.is_empty() {
            token.content.as_str()
        } else {
            value.as_str()
        };
        out.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
    }
    out.push('>');
}

fn render_block(token: &Token, out: &mut String) {
    match token.nesting {
        1 => {
            out.push('<');
            out.push_str(&token.tag);
            push_attrs(out, &token.attrs);
            out.push_str(">\n");
        }
        -1 => {
            out.push_str("</");
            out.push_str(&token.tag);
            out.push_str(">\n");
        }
        _ if !token.content.is_empty() => {
            out.push_str(&token.content);
            if !token.content.ends_with('\n') {
                out.push('\n');
            }
        }
        _ => {
            out.push('<');
            out.push_str(&token.tag);
            push_attrs(out, &token.attrs);
            out.push_str(">\n");
        }
    }
}
