//! Table-of-contents rendering and placeholder injection.
//!
//! Runs after serialization: the heading list collected by the front end is
//! rendered as nested lists and spliced over the first `<p>[toc]</p>` in the
//! page.

mod inject;
mod tree;

pub use inject::{
    TOC_PLACEHOLDER, find_placeholder, inject_rendered_toc, inject_toc, inject_toc_with,
};
pub use tree::{DEFAULT_MAX_LEVEL, TocRenderer, render_toc};
