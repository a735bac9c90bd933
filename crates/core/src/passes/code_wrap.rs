use crate::error::{EnrichError, Result};
use crate::flat::FlatIndex;
use docweave_types::{Document, TokenKind};

/// Break opportunity inserted after each underscore.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';
/// Class added to every inline code span so it may wrap.
pub const WRAPPABLE_CLASS: &str = "code-wrappable";

/// Inserts [`ZERO_WIDTH_SPACE`] after every `_` in `code`.
///
/// Not idempotent: calling it on its own output doubles the markers.
pub fn insert_wrap_points(code: &str) -> String {
    let extra = code.matches('_').count() * ZERO_WIDTH_SPACE.len_utf8();
    let mut out = String::with_capacity(code.len() + extra);
    for c in code.chars() {
        out.push(c);
        if c == '_' {
            out.push(ZERO_WIDTH_SPACE);
        }
    }
    out
}

/// Marks every inline code span as wrappable and inserts wrap points.
///
/// Must run once per document. Returns the number of spans rewritten.
pub fn wrap_inline_code(doc: &mut Document) -> Result<usize> {
    let index = FlatIndex::build(doc);
    let spans: Vec<usize> = index
        .positions(doc, |t| t.kind == TokenKind::CodeInline)
        .collect();

    for &position in &spans {
        let Some(code) = index.path(position).and_then(|path| doc.get_mut(path)) else {
            continue;
        };
        if code.is_malformed_leaf() {
            return Err(EnrichError::CodeInlineHasChildren {
                content: code.content.clone(),
                count: code.children.len(),
            });
        }
        code.push_attr("class", WRAPPABLE_CLASS);
        code.content = insert_wrap_points(&code.content);
    }

    log::debug!("Inserted wrap points into {} inline code spans", spans.len());
    Ok(spans.len())
}
