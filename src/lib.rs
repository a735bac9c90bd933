//! # docweave
//!
//! Turns markdown pages into enriched HTML: anchored headings, figures
//! inlined as data URIs, wrappable inline code, bionic-reading emphasis and a
//! table of contents spliced over the `[toc]` placeholder.
//!
//! The passes live in `docweave-core`; this crate wires them to a markdown
//! front end, a filesystem resource provider and a JSON configuration.

pub mod error;
pub mod locale;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use locale::{BuiltinContent, LanguageKey, content_for, content_html, support_languages};
pub use pipeline::{
    EnrichReport, PageContent, Pipeline, PipelineBuilder, PipelineConfig, RenderedPage,
};

pub use docweave_core::{
    AnchorId, Document, EnrichError, Emphasizer, ResourceError, ResourceProvider, TocEntry, Token,
    TokenKind,
};
pub use docweave_core::toc;
pub use docweave_markdown::{ParsedMarkdown, parse_markdown, render_html};
pub use docweave_resource::SourceRootProvider;
pub use docweave_traits::{BionicEmphasizer, InMemoryResourceProvider};
