// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::orchestrator::Pipeline;
use crate::error::{PipelineError, Result};
use docweave_resource::SourceRootProvider;
use docweave_traits::{BionicEmphasizer, Emphasizer, ResourceProvider};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`Pipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
    emphasizer: Option<Arc<dyn Emphasizer>>,
}

impl PipelineBuilder {
    /// Creates a builder with every pass enabled and no source root.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = PipelineConfig::from_file(path)?;
        Ok(self)
    }

    /// Resolves image paths against `root` on the filesystem.
    pub fn with_source_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.config.source_root = Some(root.into());
        self
    }

    /// Loads images through `provider` instead of the filesystem.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Replaces the reference bionic emphasizer.
    pub fn with_emphasizer(mut self, emphasizer: Arc<dyn Emphasizer>) -> Self {
        self.emphasizer = Some(emphasizer);
        self
    }

    pub fn with_toc_max_level(mut self, level: u8) -> Self {
        self.config.toc_max_level = level;
        self
    }

    pub fn with_bionic(mut self, enabled: bool) -> Self {
        self.config.bionic = enabled;
        self
    }

    pub fn with_code_wrapping(mut self, enabled: bool) -> Self {
        self.config.wrap_inline_code = enabled;
        self
    }

    pub fn with_figure_embedding(mut self, enabled: bool) -> Self {
        self.config.embed_figures = enabled;
        self
    }

    /// Consumes the builder and creates the [`Pipeline`].
    ///
    /// Figure embedding needs either an injected resource provider or a
    /// source root to read images from.
    pub fn build(self) -> Result<Pipeline> {
        self.config.validate()?;

        let resources: Option<Arc<dyn ResourceProvider>> =
            match (self.resources, &self.config.source_root) {
                (Some(provider), _) => Some(provider),
                (None, Some(root)) => {
                    if !root.is_dir() {
                        return Err(PipelineError::Config(format!(
                            "Source root '{}' is not a directory",
                            root.display()
                        )));
                    }
                    Some(Arc::new(SourceRootProvider::new(root)))
                }
                (None, None) => None,
            };

        if self.config.embed_figures && resources.is_none() {
            return Err(PipelineError::Config(
                "Figure embedding is enabled but no source root or resource provider was configured."
                    .to_string(),
            ));
        }

        let emphasizer: Arc<dyn Emphasizer> = match self.emphasizer {
            Some(emphasizer) => emphasizer,
            None => Arc::new(BionicEmphasizer::new()),
        };

        if let Some(provider) = &resources {
            log::debug!("Pipeline resolves images via {}", provider.name());
        }

        Ok(Pipeline::new(self.config, resources, emphasizer))
    }
}
