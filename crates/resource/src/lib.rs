//! Resource providers for the docweave pipeline.
//!
//! - [`SourceRootProvider`]: reads images relative to the document-source root
//! - [`InMemoryResourceProvider`]: re-exported from docweave-traits

mod filesystem;

pub use filesystem::SourceRootProvider;

pub use docweave_traits::InMemoryResourceProvider;
