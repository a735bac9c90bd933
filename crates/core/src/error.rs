// src/error.rs
//! Errors raised while enriching a document.
//!
//! Every variant is fatal for the document being processed. They fall into
//! two groups: configuration errors (an image that can't be resolved or
//! typed) and internal consistency errors (a collaborator or an earlier pass
//! broke a tree invariant).

use docweave_traits::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Unsupported image extension '{extension}' for '{path}'")]
    UnknownExtension { path: String, extension: String },

    #[error("Image has no 'src' attribute (alt text: {alt:?})")]
    MissingSource { alt: String },

    #[error("Failed to resolve image: {0}")]
    Resource(#[from] ResourceError),

    #[error("Inline code token has {count} children: {content:?}")]
    CodeInlineHasChildren { content: String, count: usize },

    #[error("Text token has {count} children: {content:?}")]
    TextHasChildren { content: String, count: usize },

    #[error("Emphasis output is unbalanced: {begin} begin markers, {end} end markers")]
    UnbalancedSentinels { begin: usize, end: usize },

    #[error("Misplaced emphasis marker at char {position} in {text:?}")]
    MisplacedSentinel { position: usize, text: String },

    #[error("Text already contains an emphasis sentinel: {text:?}")]
    SentinelInInput { text: String },
}

impl EnrichError {
    /// The document references something the build can't resolve.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EnrichError::UnknownExtension { .. }
                | EnrichError::MissingSource { .. }
                | EnrichError::Resource(_)
        )
    }

    /// A tree invariant or collaborator contract was violated.
    pub fn is_internal(&self) -> bool {
        !self.is_configuration()
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
