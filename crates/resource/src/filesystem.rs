//! Reads image bytes from the document-source directory.
//!
//! Image paths in a document are relative to the directory the markdown lives
//! in. A leading `/` means "relative to the source root" rather than the
//! filesystem root. Paths that would leave the root are refused.

use docweave_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A [`ResourceProvider`] rooted at a document-source directory.
#[derive(Debug, Clone)]
pub struct SourceRootProvider {
    root: PathBuf,
    /// Canonical form of `root`, when it exists, for containment checks.
    canonical_root: Option<PathBuf>,
}

impl SourceRootProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        Self {
            root,
            canonical_root,
        }
    }

    /// Maps a document path onto the filesystem, or `None` if it escapes the root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut clean = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if clean.as_os_str().is_empty() {
            return None;
        }

        let full = self.root.join(clean);
        // Symlinks inside the root may still point outside of it.
        if let (Ok(canonical), Some(root)) = (full.canonicalize(), &self.canonical_root)
            && !canonical.starts_with(root)
        {
            return None;
        }
        Some(full)
    }
}

impl ResourceProvider for SourceRootProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full = self
            .resolve(path)
            .ok_or_else(|| ResourceError::InvalidPath(path.to_string()))?;
        log::trace!("Reading resource '{}' from {}", path, full.display());

        std::fs::read(&full).map(Arc::new).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ResourceError::NotFound(path.to_string()),
            _ => ResourceError::LoadFailed {
                path: path.to_string(),
                message: e.to_string(),
            },
        })
    }

    fn name(&self) -> &'static str {
        "SourceRootProvider"
    }
}
