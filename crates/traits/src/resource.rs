//! ResourceProvider trait for abstracting how image bytes are read.
//!
//! The figure embedder never touches the filesystem directly; it asks a
//! provider rooted at the document-source directory for the bytes behind an
//! image path.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// Reads the bytes behind a document-relative path.
///
/// Implementations are shared between documents, so they must be usable from
/// several threads at once.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its document-relative path.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// A provider backed by a fixed map of path to bytes.
///
/// Populated up front and immutable afterwards, which makes it handy for
/// tests and for callers that already hold image data in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryResourceProvider {
    resources: HashMap<String, SharedResourceData>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource under `path`, replacing any previous entry.
    pub fn with_resource(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.resources.insert(path.into(), Arc::new(data.into()));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
