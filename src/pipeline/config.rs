use crate::error::{PipelineError, Result};
use docweave_core::toc::DEFAULT_MAX_LEVEL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pipeline settings, usually loaded from a JSON file.
///
/// ```json
/// { "sourceRoot": "docs", "tocMaxLevel": 2, "bionic": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Directory image paths are resolved against.
    pub source_root: Option<PathBuf>,
    /// Deepest heading level listed in the table of contents.
    pub toc_max_level: u8,
    pub bionic: bool,
    pub wrap_inline_code: bool,
    pub embed_figures: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_root: None,
            toc_max_level: DEFAULT_MAX_LEVEL,
            bionic: true,
            wrap_inline_code: true,
            embed_figures: true,
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file. A relative `sourceRoot` is taken relative to
    /// the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let mut config = Self::from_json(&json)?;

        if let Some(root) = &config.source_root {
            if root.is_relative() {
                let base = path_ref.parent().unwrap_or_else(|| Path::new(""));
                config.source_root = Some(base.join(root));
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.toc_max_level) {
            return Err(PipelineError::Config(format!(
                "tocMaxLevel must be between 1 and 6, got {}",
                self.toc_max_level
            )));
        }
        Ok(())
    }
}
