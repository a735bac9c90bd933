//! Paragraph-scoped bionic emphasis.
//!
//! Each paragraph is the run of tokens between a paragraph-open and the first
//! paragraph-close after it in the same sibling sequence. Every text leaf in
//! that run is handed to the [`Emphasizer`] and replaced by the span sequence
//! its sentinels describe. A paragraph holding nothing but the `[toc]`
//! placeholder is left alone so the injector can still find it.

use crate::error::{EnrichError, Result};
use docweave_traits::{Emphasizer, SENTINEL_BEGIN, SENTINEL_END};
use docweave_types::{Document, Token, TokenKind};

pub const SPAN_OPEN: &str = "<span class=\"bionic\">";
pub const SPAN_CLOSE: &str = "</span>";

/// Raw paragraph text that marks the TOC placeholder.
const TOC_MARKER: &str = "[toc]";

/// Counters reported by [`splice_emphasis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceStats {
    /// Paragraphs whose text leaves were rewritten.
    pub paragraphs: usize,
    /// Paragraphs skipped because they hold the TOC placeholder.
    pub skipped: usize,
    /// Emphasized spans produced.
    pub spans: usize,
}

#[derive(Debug, Default)]
struct SentinelCount {
    begin: usize,
    end: usize,
}

/// Rewrites every text leaf inside every paragraph into emphasis spans.
pub fn splice_emphasis(doc: &mut Document, emphasizer: &dyn Emphasizer) -> Result<SpliceStats> {
    let mut stats = SpliceStats::default();
    splice_sequence(&mut doc.tokens, emphasizer, &mut stats)?;
    log::debug!(
        "Bionic splicing: {} paragraphs, {} spans, {} placeholder paragraphs skipped",
        stats.paragraphs,
        stats.spans,
        stats.skipped
    );
    Ok(stats)
}

fn splice_sequence(
    tokens: &mut Vec<Token>,
    emphasizer: &dyn Emphasizer,
    stats: &mut SpliceStats,
) -> Result<()> {
    let mut cursor = 0;
    while cursor < tokens.len() {
        if tokens[cursor].kind != TokenKind::ParagraphOpen {
            if !tokens[cursor].children.is_empty() {
                splice_sequence(&mut tokens[cursor].children, emphasizer, stats)?;
            }
            cursor += 1;
            continue;
        }

        let open = cursor;
        let Some(close) = tokens[open + 1..]
            .iter()
            .position(|t| t.kind == TokenKind::ParagraphClose)
            .map(|offset| open + 1 + offset)
        else {
            log::warn!("Paragraph opened at {} is never closed; leaving it as is", open);
            return Ok(());
        };

        if is_toc_placeholder(&tokens[open + 1..close]) {
            log::trace!("Skipping TOC placeholder paragraph at {}", open);
            stats.skipped += 1;
            cursor = close + 1;
            continue;
        }

        let body: Vec<Token> = tokens.drain(open + 1..close).collect();
        let mut count = SentinelCount::default();
        let spliced = splice_tokens(body, emphasizer, &mut count)?;
        if count.begin != count.end {
            return Err(EnrichError::UnbalancedSentinels {
                begin: count.begin,
                end: count.end,
            });
        }

        let spliced_len = spliced.len();
        tokens.splice(open + 1..open + 1, spliced);
        stats.paragraphs += 1;
        stats.spans += count.begin;
        cursor = open + 1 + spliced_len + 1;
    }
    Ok(())
}

/// The paragraph's raw text, trimmed, is `[toc]` in any case.
fn is_toc_placeholder(body: &[Token]) -> bool {
    let raw: String = body.iter().map(|t| t.content.as_str()).collect();
    raw.trim().eq_ignore_ascii_case(TOC_MARKER)
}

fn splice_tokens(
    tokens: Vec<Token>,
    emphasizer: &dyn Emphasizer,
    count: &mut SentinelCount,
) -> Result<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());
    for mut token in tokens {
        match token.kind {
            TokenKind::Text => {
                if token.is_malformed_leaf() {
                    return Err(EnrichError::TextHasChildren {
                        content: token.content,
                        count: token.children.len(),
                    });
                }
                out.extend(emphasize_text(&token.content, emphasizer, count)?);
            }
            TokenKind::Inline
            | TokenKind::Block
            | TokenKind::InlineHtml
            | TokenKind::Image
            | TokenKind::CodeInline
            | TokenKind::HeadingOpen { .. }
            | TokenKind::HeadingClose { .. }
            | TokenKind::ParagraphOpen
            | TokenKind::ParagraphClose => {
                if !token.children.is_empty() {
                    let children = std::mem::take(&mut token.children);
                    token.children = splice_tokens(children, emphasizer, count)?;
                }
                out.push(token);
            }
        }
    }
    Ok(out)
}

/// Runs one text leaf through the emphasizer and converts the sentinel
/// markup into span tokens.
fn emphasize_text(
    text: &str,
    emphasizer: &dyn Emphasizer,
    count: &mut SentinelCount,
) -> Result<Vec<Token>> {
    if text.contains([SENTINEL_BEGIN, SENTINEL_END]) {
        return Err(EnrichError::SentinelInInput {
            text: text.to_string(),
        });
    }

    let marked = emphasizer.emphasize(text);
    let mut out = Vec::new();
    let mut segment = String::new();
    let mut inside = false;
    let (mut begins, mut ends) = (0, 0);

    for (position, c) in marked.chars().enumerate() {
        match c {
            SENTINEL_BEGIN => {
                if inside {
                    return Err(EnrichError::MisplacedSentinel {
                        position,
                        text: marked.clone(),
                    });
                }
                if !segment.is_empty() {
                    out.push(Token::text(std::mem::take(&mut segment)));
                }
                inside = true;
                begins += 1;
            }
            SENTINEL_END => {
                if !inside {
                    return Err(EnrichError::MisplacedSentinel {
                        position,
                        text: marked.clone(),
                    });
                }
                out.push(Token::inline_html(SPAN_OPEN));
                if !segment.is_empty() {
                    out.push(Token::text(std::mem::take(&mut segment)));
                }
                out.push(Token::inline_html(SPAN_CLOSE));
                inside = false;
                ends += 1;
            }
            _ => segment.push(c),
        }
    }

    if inside {
        return Err(EnrichError::UnbalancedSentinels {
            begin: begins,
            end: ends,
        });
    }
    if !segment.is_empty() {
        out.push(Token::text(segment));
    }

    count.begin += begins;
    count.end += ends;
    Ok(out)
}
