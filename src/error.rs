// src/error.rs
use docweave_core::EnrichError;
use thiserror::Error;

/// Errors surfaced by the top-level pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Enrichment failed: {0}")]
    Enrich(#[from] EnrichError),

    #[error("Invalid pipeline configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// The document or the configuration references something that can't be
    /// resolved, as opposed to a broken tree invariant.
    pub fn is_configuration(&self) -> bool {
        match self {
            PipelineError::Enrich(e) => e.is_configuration(),
            PipelineError::Config(_) | PipelineError::Json(_) | PipelineError::Io(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
