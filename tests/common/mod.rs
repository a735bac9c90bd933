pub mod fixtures;

use docweave::{Pipeline, PipelineBuilder, PipelineError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Bytes standing in for a PNG; their base64 form is `PNG_BASE64`.
pub const PNG_BYTES: &[u8] = b"\x89PNG";
pub const PNG_BASE64: &str = "iVBORw==";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A document-source directory with a couple of images under `img/`.
pub struct SourceSite {
    pub dir: TempDir,
}

impl SourceSite {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::create_dir(dir.path().join("img"))?;
        fs::write(dir.path().join("img/chart.png"), PNG_BYTES)?;
        fs::write(dir.path().join("img/photo.jpg"), b"\xff\xd8\xff")?;
        fs::write(dir.path().join("img/logo.svg"), b"<svg/>")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A pipeline reading images from this site with every pass enabled.
    pub fn pipeline(&self) -> Result<Pipeline, PipelineError> {
        self.builder().build()
    }

    pub fn builder(&self) -> PipelineBuilder {
        PipelineBuilder::new().with_source_root(self.root())
    }
}

/// Renders `markdown` against a fresh site with every pass enabled.
pub fn render(markdown: &str) -> Result<String, PipelineError> {
    let site = SourceSite::new()?;
    Ok(site.pipeline()?.render_markdown(markdown)?.html)
}
