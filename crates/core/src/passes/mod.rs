//! In-place enrichment passes over a parsed document.
//!
//! ## Pass Order
//!
//! 1. **Heading ids** - `section_…` id on every heading-open token
//! 2. **Figures** - inline image bytes as data URIs, add captions and ids
//! 3. **Code wrap points** - zero-width breaks after underscores in inline code
//! 4. **Bionic splicing** - emphasis spans inside paragraphs
//!
//! Each pass runs exactly once per document, in this order. Wrap points go in
//! before splicing, and splicing sees the finished tree.

mod bionic;
mod code_wrap;
mod figures;
mod heading_ids;

pub use bionic::{SPAN_CLOSE, SPAN_OPEN, SpliceStats, splice_emphasis};
pub use code_wrap::{WRAPPABLE_CLASS, ZERO_WIDTH_SPACE, insert_wrap_points, wrap_inline_code};
pub use figures::{CAPTION_CLOSE, CAPTION_OPEN, embed_figures};
pub use heading_ids::assign_heading_ids;
