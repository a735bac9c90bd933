//! # docweave-core
//!
//! The enrichment passes that run over a parsed token tree before it is
//! serialized, plus the table-of-contents renderer that runs after:
//! - **passes**: heading ids, figure embedding, inline-code wrap points and
//!   bionic emphasis splicing, each a single in-place pass over a `Document`
//! - **toc**: nested-list rendering of the heading list and `[toc]` injection
//! - **slug**: the identifier rules shared by heading ids, figure ids and TOC
//!   link targets
//! - **flat**: a pre-order index of tree paths for forward scans
//!
//! Nothing here touches the filesystem; image bytes come through a
//! `ResourceProvider` and word emphasis through an `Emphasizer`.

// Re-export foundation crates
pub use docweave_traits as traits;
pub use docweave_types as types;

pub mod error;
pub mod escape;
pub mod flat;
pub mod mime;
pub mod passes;
pub mod slug;
pub mod toc;

pub use error::{EnrichError, Result};
pub use flat::FlatIndex;
pub use passes::{
    SpliceStats, assign_heading_ids, embed_figures, insert_wrap_points, splice_emphasis,
    wrap_inline_code,
};
pub use slug::{figure_id, section_id};
pub use toc::{TOC_PLACEHOLDER, TocRenderer, inject_toc, render_toc};

pub use traits::{Emphasizer, ResourceError, ResourceProvider};
pub use types::{AnchorId, Document, TocEntry, Token, TokenKind};
