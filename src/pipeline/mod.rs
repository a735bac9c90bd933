//! Document enrichment pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder wiring config, resources and emphasis
//! - [`PipelineConfig`]: which passes run and where images are read from
//! - [`Pipeline`]: runs the passes in their fixed order over one document
//!
//! # Example
//!
//! ```no_run
//! use docweave::PipelineBuilder;
//!
//! # fn main() -> Result<(), docweave::PipelineError> {
//! let pipeline = PipelineBuilder::new()
//!     .with_source_root("docs")
//!     .build()?;
//!
//! let page = pipeline.render_markdown("[toc]\n\n# Intro\n\n![Figure 1](img/a.png)\n")?;
//! println!("{}", page.html);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::PipelineConfig;
pub use orchestrator::{EnrichReport, PageContent, Pipeline, RenderedPage};
