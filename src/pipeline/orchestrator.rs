// src/pipeline/orchestrator.rs
use super::config::PipelineConfig;
use crate::error::Result;
use docweave_core::toc::inject_toc_with;
use docweave_core::{
    Document, Emphasizer, ResourceProvider, TocEntry, TocRenderer, assign_heading_ids,
    embed_figures, splice_emphasis, wrap_inline_code,
};
use docweave_markdown::{parse_markdown, render_html};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-pass counts from one [`Pipeline::enrich`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichReport {
    pub headings: usize,
    pub figures: usize,
    pub code_spans: usize,
    pub paragraphs: usize,
    pub spans: usize,
    pub skipped_paragraphs: usize,
}

/// Serialized page body with the `[toc]` placeholder still in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

impl PageContent {
    pub fn new(html: impl Into<String>, toc: Vec<TocEntry>) -> Self {
        Self {
            html: html.into(),
            toc,
        }
    }

    /// The body with its first placeholder replaced by the rendered TOC.
    pub fn html_with_toc(&self, renderer: &TocRenderer) -> String {
        inject_toc_with(renderer, &self.html, &self.toc)
    }
}

/// A finished page: HTML with the TOC injected, plus its heading list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub report: EnrichReport,
}

/// Runs the enrichment passes in their fixed order.
///
/// A `Pipeline` holds no per-document state and can be shared across threads.
pub struct Pipeline {
    config: PipelineConfig,
    toc: TocRenderer,
    resources: Option<Arc<dyn ResourceProvider>>,
    emphasizer: Arc<dyn Emphasizer>,
}

impl Pipeline {
    pub(super) fn new(
        config: PipelineConfig,
        resources: Option<Arc<dyn ResourceProvider>>,
        emphasizer: Arc<dyn Emphasizer>,
    ) -> Self {
        Self {
            toc: TocRenderer::new(config.toc_max_level),
            config,
            resources,
            emphasizer,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn toc_renderer(&self) -> &TocRenderer {
        &self.toc
    }

    /// Runs heading ids, figure embedding, code wrap points and bionic
    /// splicing over `doc`, skipping passes the config disables.
    ///
    /// Must run once per document: wrap points are not idempotent.
    pub fn enrich(&self, doc: &mut Document) -> Result<EnrichReport> {
        let mut report = EnrichReport {
            headings: assign_heading_ids(doc),
            ..Default::default()
        };

        if self.config.embed_figures {
            if let Some(resources) = &self.resources {
                report.figures = embed_figures(doc, resources.as_ref())?;
            }
        }
        if self.config.wrap_inline_code {
            report.code_spans = wrap_inline_code(doc)?;
        }
        if self.config.bionic {
            let stats = splice_emphasis(doc, self.emphasizer.as_ref())?;
            report.paragraphs = stats.paragraphs;
            report.spans = stats.spans;
            report.skipped_paragraphs = stats.skipped;
        }

        log::debug!("Enriched document: {:?}", report);
        Ok(report)
    }

    /// Parses, enriches and serializes `source`, leaving the placeholder in
    /// the body.
    pub fn render_content(&self, source: &str) -> Result<(PageContent, EnrichReport)> {
        let parsed = parse_markdown(source);
        let mut doc = parsed.document;
        let report = self.enrich(&mut doc)?;
        Ok((PageContent::new(render_html(&doc), parsed.toc), report))
    }

    /// Parses, enriches, serializes and injects the TOC.
    pub fn render_markdown(&self, source: &str) -> Result<RenderedPage> {
        let parsed = parse_markdown(source);
        self.render_document(parsed.document, parsed.toc)
    }

    /// Same as [`render_markdown`](Self::render_markdown) for a tree parsed
    /// elsewhere.
    pub fn render_document(&self, mut doc: Document, toc: Vec<TocEntry>) -> Result<RenderedPage> {
        let report = self.enrich(&mut doc)?;
        let content = PageContent::new(render_html(&doc), toc);
        Ok(RenderedPage {
            html: content.html_with_toc(&self.toc),
            toc: content.toc,
            report,
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}
