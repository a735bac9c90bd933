//! # docweave-markdown
//!
//! The two ends of the pipeline that deal in text:
//! - **parse**: CommonMark source to a token tree plus its heading list
//! - **render**: the (enriched) token tree back to HTML

pub mod parse;
pub mod render;

pub use parse::{ParsedMarkdown, parse_markdown};
pub use render::render_html;
